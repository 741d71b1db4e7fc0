//! The `FileMeta` capability: `getMeta(uri)` → `{name, mime}`.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{MetaError, MetaFailure};
use crate::record::MetaRecord;
use crate::resolver::MetaResolver;

use super::BridgeModule;

/// Capability name the module registers under.
pub const CAPABILITY: &str = "FileMeta";

/// The module's single operation.
pub const OP_GET_META: &str = "getMeta";

pub struct FileMetaModule {
    resolver: Arc<MetaResolver>,
}

impl FileMetaModule {
    pub fn new(resolver: Arc<MetaResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves a reference string to its metadata record.
    pub fn get_meta(&self, uri: &str) -> Result<MetaRecord, MetaError> {
        self.resolver.resolve(uri)
    }
}

impl BridgeModule for FileMetaModule {
    fn name(&self) -> &'static str {
        CAPABILITY
    }

    fn invoke(&self, operation: &str, argument: &str) -> Result<Value, MetaError> {
        match operation {
            OP_GET_META => {
                let record = self.get_meta(argument)?;
                serde_json::to_value(&record)
                    .map_err(|e| MetaError::with_source(MetaFailure::Dispatch, e.into()))
            }
            _ => Err(MetaError::new(MetaFailure::UnknownOperation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, DISPLAY_NAME};
    use crate::provider::ContentProvider;
    use url::Url;

    struct StaticProvider;

    impl ContentProvider for StaticProvider {
        fn content_type(&self, _uri: &Url) -> anyhow::Result<Option<String>> {
            Ok(Some("application/pdf".to_string()))
        }

        fn query(&self, _uri: &Url) -> anyhow::Result<Option<Cursor>> {
            Ok(Some(Cursor::new(
                vec![DISPLAY_NAME],
                vec![vec![Some("report.pdf".to_string())]],
            )))
        }
    }

    fn module() -> FileMetaModule {
        let mut resolver = MetaResolver::new();
        resolver.register_provider("content", Arc::new(StaticProvider));
        FileMetaModule::new(Arc::new(resolver))
    }

    #[test]
    fn registers_under_the_file_meta_name() {
        assert_eq!(module().name(), "FileMeta");
    }

    #[test]
    fn get_meta_marshals_record_as_json() {
        let value = module().invoke(OP_GET_META, "content://docs/1").unwrap();
        assert_eq!(value["name"], "report.pdf");
        assert_eq!(value["mime"], "application/pdf");
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = module().invoke("putMeta", "content://docs/1").unwrap_err();
        assert_eq!(err.reason(), MetaFailure::UnknownOperation);
    }

    #[test]
    fn resolver_failure_propagates_as_meta_error() {
        let err = module().invoke(OP_GET_META, "not a uri").unwrap_err();
        assert_eq!(err.code(), "META_ERROR");
    }
}
