//! `outlink langs` – list supported interstitial languages.

use outlink_core::locale;

pub fn run_langs() {
    println!("{:<6} {}", "CODE", "TITLE");
    for (code, entry) in locale::supported() {
        println!("{:<6} {}", code, entry.title);
    }
}
