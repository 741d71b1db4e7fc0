//! Bridge registry: named capabilities the embedding runtime can invoke.
//!
//! The registry is a plain map from capability name to module handle,
//! built once at startup. Module work is synchronous; `dispatch` is the
//! promise-style caller surface and runs modules on the blocking pool.

pub mod file_meta;

pub use file_meta::FileMetaModule;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::config::FmetaConfig;
use crate::error::{MetaError, MetaFailure};
use crate::resolver::MetaResolver;

/// A named capability exposed to the embedding runtime.
pub trait BridgeModule: Send + Sync {
    /// Capability name the module is registered under.
    fn name(&self) -> &'static str;

    /// Runs one operation synchronously. Results are marshaled as JSON,
    /// the bridge's wire shape.
    fn invoke(&self, operation: &str, argument: &str) -> Result<Value, MetaError>;
}

/// Capability name → module handle.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn BridgeModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module under its capability name. Re-registration
    /// replaces the previous module (last one wins).
    pub fn register(&mut self, module: Arc<dyn BridgeModule>) {
        self.modules.insert(module.name().to_string(), module);
    }

    pub fn get(&self, capability: &str) -> Option<Arc<dyn BridgeModule>> {
        self.modules.get(capability).cloned()
    }

    /// Registered capability names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        names.sort();
        names
    }

    /// Invokes `capability.operation(argument)` promise-style: the module's
    /// synchronous work runs on the blocking pool and the future resolves
    /// with its result or rejects with the single `META_ERROR` kind.
    pub async fn dispatch(
        &self,
        capability: &str,
        operation: &str,
        argument: String,
    ) -> Result<Value, MetaError> {
        let module = self
            .get(capability)
            .ok_or_else(|| MetaError::new(MetaFailure::UnknownCapability))?;

        let operation = operation.to_string();
        tokio::task::spawn_blocking(move || module.invoke(&operation, &argument))
            .await
            .map_err(|e| MetaError::with_source(MetaFailure::Dispatch, e.into()))?
    }
}

/// Registers the built-in modules. Called once at startup by the embedding
/// surface; declares no capabilities beyond `FileMeta`.
pub fn register_builtin_modules(registry: &mut ModuleRegistry, cfg: &FmetaConfig) {
    let resolver = Arc::new(MetaResolver::with_defaults(cfg));
    registry.register(Arc::new(FileMetaModule::new(resolver)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::META_ERROR_CODE;

    struct EchoModule {
        name: &'static str,
        reply: &'static str,
    }

    impl BridgeModule for EchoModule {
        fn name(&self) -> &'static str {
            self.name
        }

        fn invoke(&self, operation: &str, argument: &str) -> Result<Value, MetaError> {
            if operation != "echo" {
                return Err(MetaError::new(MetaFailure::UnknownOperation));
            }
            Ok(Value::String(format!("{}:{}", self.reply, argument)))
        }
    }

    #[test]
    fn register_and_list_names() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(EchoModule {
            name: "Beta",
            reply: "b",
        }));
        registry.register(Arc::new(EchoModule {
            name: "Alpha",
            reply: "a",
        }));
        assert_eq!(registry.names(), vec!["Alpha", "Beta"]);
        assert!(registry.get("Alpha").is_some());
        assert!(registry.get("Gamma").is_none());
    }

    #[test]
    fn re_registration_last_wins() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(EchoModule {
            name: "Echo",
            reply: "old",
        }));
        registry.register(Arc::new(EchoModule {
            name: "Echo",
            reply: "new",
        }));
        assert_eq!(registry.names(), vec!["Echo"]);
        let value = registry.get("Echo").unwrap().invoke("echo", "x").unwrap();
        assert_eq!(value, Value::String("new:x".to_string()));
    }

    #[tokio::test]
    async fn dispatch_resolves_with_module_result() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(EchoModule {
            name: "Echo",
            reply: "r",
        }));
        let value = registry
            .dispatch("Echo", "echo", "hello".to_string())
            .await
            .unwrap();
        assert_eq!(value, Value::String("r:hello".to_string()));
    }

    #[tokio::test]
    async fn dispatch_unknown_capability_rejects() {
        let registry = ModuleRegistry::new();
        let err = registry
            .dispatch("Nope", "echo", String::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), META_ERROR_CODE);
        assert_eq!(err.reason(), MetaFailure::UnknownCapability);
    }

    #[tokio::test]
    async fn dispatch_unknown_operation_rejects() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(EchoModule {
            name: "Echo",
            reply: "r",
        }));
        let err = registry
            .dispatch("Echo", "shout", String::new())
            .await
            .unwrap_err();
        assert_eq!(err.reason(), MetaFailure::UnknownOperation);
    }

    #[test]
    fn builtin_registration_exposes_file_meta_only() {
        let mut registry = ModuleRegistry::new();
        register_builtin_modules(&mut registry, &FmetaConfig::default());
        assert_eq!(registry.names(), vec![file_meta::CAPABILITY]);
    }
}
