use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct MetricCardProps {
    label: String,
    value: String,
    /// Emoji shown beside the label.
    icon: String,
    /// CSS color for the icon.
    accent: String,
    /// Full error text, shown as a tooltip when the value failed to load.
    #[props(default)]
    error: Option<String>,
    #[props(optional)]
    on_retry: Option<EventHandler<MouseEvent>>,
}

/// One tile of the dashboard grid.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        article {
            class: "metric-card",
            span {
                class: "metric-icon",
                style: "color: {props.accent};",
                "{props.icon}"
            }
            div {
                p {
                    class: "metric-label",
                    strong { "{props.label}:" }
                }
                if let Some(error) = props.error.as_ref() {
                    p {
                        class: "metric-value metric-error",
                        title: "{error}",
                        "{props.value}"
                    }
                    if let Some(on_retry) = props.on_retry {
                        a {
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_retry.call(evt);
                            },
                            "Retry"
                        }
                    }
                } else {
                    p {
                        class: "metric-value",
                        "{props.value}"
                    }
                }
            }
        }
    }
}
