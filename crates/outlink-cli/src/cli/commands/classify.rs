//! `outlink classify <host>` – private/internal check for a hostname.

use outlink_core::netclass;

pub fn run_classify(host: &str) {
    if netclass::is_private_or_internal(host) {
        println!("private");
    } else {
        println!("public");
    }
}
