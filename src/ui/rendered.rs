/// What a placeholder shows, independent of the widget toolkit.
///
/// The view is a pure function of the fetch state and the props. Besides
/// driving the iced widgets, it renders to HTML; the class names are the
/// styling hooks exposed to host applications.
use html_escape::{encode_double_quoted_attribute as attr, encode_text};

use crate::fetch::FetchState;

use super::placeholder::PlaceholderProps;

pub const LOADING_CLASS: &str = "placeholder-loading";
pub const ERROR_CLASS: &str = "placeholder-error";
pub const IMAGE_CLASS: &str = "placeholder-image";

/// Text shown while a fetch is pending
pub const LOADING_TEXT: &str = "Loading...";

/// Background of the loading and error boxes (#f0f0f0)
pub const BOX_BACKGROUND_HEX: &str = "#f0f0f0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Loading {
        class_name: String,
        width: u32,
        height: u32,
    },
    Error {
        class_name: String,
        width: u32,
        height: u32,
        text: String,
    },
    Image {
        src: String,
        width: u32,
        height: u32,
        alt: String,
        class_name: String,
    },
}

impl Rendered {
    pub fn from_state(state: &FetchState, props: &PlaceholderProps) -> Self {
        let width = props.params.width;
        let height = props.params.height;

        match state {
            FetchState::Loading => Rendered::Loading {
                class_name: class_list(LOADING_CLASS, &props.class_name),
                width,
                height,
            },
            FetchState::Error(message) => Rendered::Error {
                class_name: class_list(ERROR_CLASS, &props.class_name),
                width,
                height,
                text: error_text(message),
            },
            FetchState::Loaded(image) => Rendered::Image {
                src: image.url.clone(),
                width,
                height,
                alt: props.alt.clone(),
                class_name: class_list(IMAGE_CLASS, &props.class_name),
            },
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            Rendered::Loading { class_name, .. }
            | Rendered::Error { class_name, .. }
            | Rendered::Image { class_name, .. } => class_name,
        }
    }

    /// HTML markup for this view
    pub fn to_html(&self) -> String {
        match self {
            Rendered::Loading {
                class_name,
                width,
                height,
            } => format!(
                r#"<div class="{}" style="{}">{}</div>"#,
                attr(class_name),
                box_style(*width, *height, None),
                LOADING_TEXT
            ),
            Rendered::Error {
                class_name,
                width,
                height,
                text,
            } => format!(
                r#"<div class="{}" style="{}">{}</div>"#,
                attr(class_name),
                box_style(*width, *height, Some("red")),
                encode_text(text)
            ),
            Rendered::Image {
                src,
                width,
                height,
                alt,
                class_name,
            } => format!(
                r#"<img src="{}" width="{}" height="{}" alt="{}" class="{}" style="object-fit:cover">"#,
                attr(src),
                width,
                height,
                attr(alt),
                attr(class_name)
            ),
        }
    }
}

/// Text of the error box
pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

/// Base class followed by the caller's extra classes, if any
fn class_list(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

fn box_style(width: u32, height: u32, color: Option<&str>) -> String {
    let mut style = format!(
        "width:{}px;height:{}px;display:flex;align-items:center;justify-content:center;background-color:{}",
        width, height, BOX_BACKGROUND_HEX
    );
    if let Some(color) = color {
        style.push_str(";color:");
        style.push_str(color);
    }
    style
}
