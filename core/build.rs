use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=SITE_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let config_path = resolve_config_path(workspace_root);
    println!("cargo:rerun-if-changed={}", config_path.display());

    let contents = fs::read_to_string(&config_path).unwrap_or_else(|err| {
        panic!(
            "failed to read site config at {}: {err}",
            config_path.display()
        )
    });

    if let Err(err) = contents.parse::<toml::Table>() {
        panic!(
            "failed to parse site config at {}: {err}",
            config_path.display()
        );
    }

    let config_path = config_path.canonicalize().unwrap_or(config_path);
    println!("cargo:rustc-env=ARUKOTO_SITE_CONFIG={}", config_path.display());
}

fn resolve_config_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SITE_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => workspace_root.join("site.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}
