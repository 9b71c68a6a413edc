use std::fs;

fn main() {
    // Both files are embedded with include_str!; only the config has syntax to check
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);
    println!("cargo:rerun-if-changed=src/post_template.html");

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read bundled config {}: {}", config_path, e));

    if let Err(e) = content.parse::<toml::Table>() {
        panic!("Invalid bundled config {}: {}", config_path, e);
    }
}
