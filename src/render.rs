//! Markup for a built page. Rendering reads the declarations and never
//! changes them.

use crate::capability::CapabilitySet;
use crate::i18n::StringTable;
use crate::page::ConfigPage;
use crate::registry::OptionDecl;
use std::fmt::Write;

pub fn render_page(page: &ConfigPage) -> String {
    let profile = page.profile();
    let mut out = String::new();

    if profile.header_footer {
        if let Some(name) = page.caps.get("watch_name") {
            let _ = write!(
                out,
                r#"<div data-role="header" id="loading_header"><h3>{}</h3></div>"#,
                escape_html(name)
            );
        }
    }

    if profile.buttons {
        out.push_str(&render_buttons("a", &page.strings));
    }

    for decl in &page.registry {
        out.push_str(&render_option(decl, &page.caps));
    }

    if profile.buttons {
        out.push_str(&render_buttons("b", &page.strings));
    }

    if profile.header_footer {
        if let Some(footer) = footer_text(&page.caps, &page.strings) {
            let _ = write!(
                out,
                r#"<div data-theme="a" data-role="footer">{}</div>"#,
                escape_html(&footer)
            );
        }
    }

    out
}

/// Label plus select for one declaration, with the initial choice marked
/// `selected`.
pub fn render_option(decl: &OptionDecl, caps: &CapabilitySet) -> String {
    let id = escape_html(&decl.storage_key);
    let selected = decl.initial_index(caps);

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div data-role="fieldcontain"><label for="{id}">{}</label><select name="{id}" id="{id}" data-role="{}">"#,
        escape_html(&decl.label),
        decl.role,
    );
    for (i, choice) in decl.choices.iter().enumerate() {
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            escape_html(&choice.value.to_string()),
            if i == selected { " selected" } else { "" },
            escape_html(&choice.text)
        );
    }
    out.push_str("</select></div>");
    out
}

pub fn render_buttons(suffix: &str, strings: &StringTable) -> String {
    format!(
        concat!(
            r#"<div class="ui-grid-a">"#,
            r#"<div class="ui-block-a"><input id="cancel_{s}" value="{cancel}" type="submit"></div>"#,
            r#"<div class="ui-block-b"><input id="save_{s}" data-theme="a" value="{save}" type="submit"></div>"#,
            "</div>"
        ),
        s = escape_html(suffix),
        cancel = escape_html(&strings.lookup("Cancel")),
        save = escape_html(&strings.lookup("Save")),
    )
}

fn footer_text(caps: &CapabilitySet, strings: &StringTable) -> Option<String> {
    let name = caps.get("watch_name")?;
    Some(match caps.get("version").filter(|v| !v.is_empty()) {
        Some(version) => format!("{} {} {}", name, strings.lookup("Version"), version),
        None => name.to_string(),
    })
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
