use gloo_console::warn;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use crate::dom::{local_storage, prefers_reduced_motion, system_prefers_dark};
use crate::theme::Theme;

const THEME_KEY: &str = "portfolio-theme";

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn resolve_theme() -> Theme {
    read_stored_theme().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let class_list = root.class_list();
            let _ = match theme {
                Theme::Dark => class_list.add_1("dark"),
                Theme::Light => class_list.remove_1("dark"),
            };
        }
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        apply_theme(theme);
    });

    // The browser runs the update callback after snapshotting, so the
    // closure must outlive this call.
    match start_view_transition.call1(&document_js, callback.as_ref().unchecked_ref()) {
        Ok(_) => callback.forget(),
        Err(_) => apply_theme(theme),
    }
}

fn persist_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        warn!("theme preference not persisted: storage unavailable");
        return;
    };

    if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
        warn!("theme preference not persisted: storage rejected the write");
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(resolve_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let handle = ThemeHandle {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("ThemeProvider is not mounted")
}
