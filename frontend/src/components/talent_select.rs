use stylist::yew::styled_component;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::form::TalentType;

#[derive(Properties, PartialEq)]
pub struct TalentSelectProps {
    pub value: Option<TalentType>,
    /// Receives the option key, or "" for the placeholder entry.
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::from("Select talent type..."))]
    pub placeholder: AttrValue,
}

/// Dropdown styled to match the form inputs. Closes on outside clicks.
#[styled_component(TalentSelect)]
pub fn talent_select(props: &TalentSelectProps) -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| {
            open.set(false);
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let selected_label = props
        .value
        .map(|talent| talent.label().to_string())
        .unwrap_or_else(|| props.placeholder.to_string());

    let choose = |key: &'static str| {
        let open = open.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(key.to_string());
            open.set(false);
        })
    };

    let options = std::iter::once(("", props.placeholder.to_string()))
        .chain(TalentType::ALL.into_iter().map(|t| (t.key(), t.label().to_string())));

    html! {
        <div ref={node} class={css!(r#"
            position: relative;
            width: 100%;
            background-color: rgba(255, 255, 255, 0.1);
            color: #FFFFFF;
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 0.5rem;
            cursor: pointer;

            .select-current {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0.75rem 1rem;
                font-size: 0.875rem;
            }
            .select-arrow {
                transition: transform 0.2s ease;
            }
            .select-arrow.open {
                transform: rotate(180deg);
            }
            .select-options {
                position: absolute;
                left: 0;
                right: 0;
                margin-top: 0.25rem;
                z-index: 10;
                border-radius: 0.5rem;
                background-color: #0b2447;
                border: 1px solid rgba(255, 255, 255, 0.2);
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
            }
            .select-option {
                padding: 0.5rem 1rem;
                font-size: 0.875rem;
                transition: background-color 0.15s ease;
            }
            .select-option:hover {
                background-color: rgba(255, 255, 255, 0.2);
            }
        "#)}>
            <div class="select-current" onclick={toggle}>
                <span>{selected_label}</span>
                <span class={classes!("select-arrow", (*open).then(|| "open"))}>{"▾"}</span>
            </div>
            if *open {
                <div class="select-options">
                    { for options.map(|(key, label)| html! {
                        <div key={key} class="select-option" onclick={choose(key)}>
                            {label}
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
