//! Asset paths relative to the asset root (`assets/`).

pub const MANIFEST_PATH: &str = "showcase/manifest.json";
