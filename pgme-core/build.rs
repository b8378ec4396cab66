/// Re-embed the build metadata whenever the release pipeline changes it.
fn main() {
    println!("cargo:rerun-if-env-changed=PGME_RELEASE");
    println!("cargo:rerun-if-env-changed=PGME_COMMIT");
    println!("cargo:rerun-if-env-changed=PGME_BUILD_TIME");
}
