use std::env;

fn main() {
    // Only the firmware build links against ESP-IDF; host builds run the driver tests
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "espidf" {
        embuild::espidf::sysenv::output();
    } else {
        println!("cargo:warning=Not building for espidf, skipping ESP-IDF link arguments");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
