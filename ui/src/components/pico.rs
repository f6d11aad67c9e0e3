//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("{} outline", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    rsx! {
        button {
            class: "{class_str}",
            "aria-busy": "{props.busy}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A blocking dialog. Closes via its header link, the backdrop, or Escape.
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        if props.is_open {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| on_close.call(()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                // The <article> stops clicks from reaching the backdrop.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_close.call(());
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                    footer {
                        button {
                            onclick: move |_| on_close.call(()),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
