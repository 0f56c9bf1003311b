use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackButtonProps {
    pub on_click: Callback<()>,
}

#[styled_component(BackButton)]
pub fn back_button(props: &BackButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_click.emit(());
        })
    };

    html! {
        <button
            {onclick}
            class={css!(r#"
                position: fixed;
                top: 1rem;
                left: 1rem;
                z-index: 50;
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                background: transparent;
                border: none;
                color: #BFDBFE;
                font-size: 0.9rem;
                font-weight: 500;
                cursor: pointer;
                transition: opacity 0.2s ease;

                &:hover {
                    opacity: 0.7;
                }
            "#)}
        >
            <span>{"←"}</span>
            <span>{"Back"}</span>
        </button>
    }
}
