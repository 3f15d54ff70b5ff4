use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::motion::magnetic_shift;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CleanVariant {
    Liquid,
    Ghost,
}

impl CleanVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MagneticVariant {
    Default,
    Outline,
}

impl MagneticVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "filled",
            Self::Outline => "outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CleanButtonProps {
    pub href: AttrValue,
    #[prop_or(CleanVariant::Liquid)]
    pub variant: CleanVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_hover: Callback<bool>,
    pub children: Html,
}

#[function_component(CleanButton)]
pub fn clean_button(props: &CleanButtonProps) -> Html {
    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(true))
    };

    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(false))
    };

    html! {
        <a
            class={classes!("clean-button", props.variant.class(), props.class.clone())}
            href={props.href.clone()}
            target={props.external.then_some("_blank")}
            rel={props.external.then_some("noopener noreferrer")}
            aria-label={props.aria_label.clone()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <span class="button-label">{props.children.clone()}</span>
            { props.external.then(|| html! {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }) }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or(MagneticVariant::Default)]
    pub variant: MagneticVariant,
    #[prop_or_default]
    pub on_hover: Callback<bool>,
    pub children: Html,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let shift = use_state(|| (0.0_f64, 0.0_f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let shift = shift.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event.current_target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<Element>() else {
                return;
            };

            let rect = element.get_bounding_client_rect();
            let dx = f64::from(event.client_x()) - rect.left() - rect.width() / 2.0;
            let dy = f64::from(event.client_y()) - rect.top() - rect.height() / 2.0;
            shift.set(magnetic_shift(dx, dy));
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(true);
            on_hover.emit(true);
        })
    };

    let onmouseleave = {
        let shift = shift.clone();
        let hovered = hovered.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            shift.set((0.0, 0.0));
            hovered.set(false);
            on_hover.emit(false);
        })
    };

    let (x, y) = *shift;
    let ease = if *hovered { "0.1s" } else { "0.3s" };
    let style =
        format!("transform: translate({x:.2}px, {y:.2}px); transition: transform {ease} ease-out;");

    html! {
        <a
            class={classes!("magnetic-button", props.variant.class())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            style={style}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <span class="button-label">{props.children.clone()}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}
