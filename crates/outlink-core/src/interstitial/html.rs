//! HTML render sink.
//!
//! Every dynamic string is escaped for its position (text content or
//! double-quoted attribute); no markup is ever assembled from untrusted
//! input.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{Interstitial, LINK_REL};

pub(super) fn confirm_page(page: &Interstitial) -> String {
    let lang = encode_double_quoted_attribute(page.lang);
    let title = encode_text(page.title);
    let warning = encode_text(page.warning);
    let action = encode_text(page.action);
    let href_attr = encode_double_quoted_attribute(&page.href);
    let href_text = encode_text(&page.href);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p>{warning}</p>\n\
         <p><code>{href_text}</code></p>\n\
         <p><a href=\"{href_attr}\" rel=\"{LINK_REL}\">{action}</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

pub(super) fn failure_page(message: &str) -> String {
    let message = encode_text(message);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Invalid link</title></head>\n\
         <body>\n\
         <p>{message}</p>\n\
         </body>\n\
         </html>\n"
    )
}
