use gloo_timers::callback::Interval;
use js_sys::{Array, Date, Function, Intl, Object, Reflect};
use wasm_bindgen::JsValue;
use yew::prelude::*;

const TICK_MS: u32 = 1_000;
const TIME_ZONE: &str = "Asia/Kolkata";
const ZONE_LABEL: &str = "IST";

fn time_formatter() -> Function {
    let options = Object::new();
    let entries = [
        ("timeZone", JsValue::from_str(TIME_ZONE)),
        ("hour12", JsValue::from_bool(true)),
        ("hour", JsValue::from_str("numeric")),
        ("minute", JsValue::from_str("2-digit")),
        ("second", JsValue::from_str("2-digit")),
    ];
    for (key, value) in entries {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &value);
    }

    Intl::DateTimeFormat::new(&Array::of1(&JsValue::from_str("en-US")), &options).format()
}

fn format_now(format: &Function) -> String {
    format
        .call1(&JsValue::NULL, &Date::new_0())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

#[function_component(ClockReadout)]
pub fn clock_readout() -> Html {
    let readout = use_state(String::new);

    {
        let readout = readout.clone();
        use_effect_with((), move |_| {
            let format = time_formatter();
            readout.set(format_now(&format));

            let interval = Interval::new(TICK_MS, move || {
                readout.set(format_now(&format));
            });

            move || drop(interval)
        });
    }

    html! {
        <div class="clock-readout">{format!("{ZONE_LABEL} {}", *readout)}</div>
    }
}
