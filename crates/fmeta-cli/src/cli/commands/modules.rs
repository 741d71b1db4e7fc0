//! `fmeta modules` – list registered bridge capabilities.

use fmeta_core::bridge::ModuleRegistry;

pub fn run_modules(registry: &ModuleRegistry) {
    for name in registry.names() {
        println!("{name}");
    }
}
