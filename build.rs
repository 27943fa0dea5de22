fn main() {
    // Embedded migrations are compiled in by sqlx::migrate!
    println!("cargo:rerun-if-changed=migrations");
}
