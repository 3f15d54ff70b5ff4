use yew::prelude::*;

use crate::content::Glyph;

pub fn paper_plane() -> Html {
    html! {
        <svg class="sketch-icon" width="60" height="40" viewBox="0 0 60 40" aria-hidden="true">
            <path
                d="M5 20 L50 5 L35 20 L50 35 L5 20 Z M35 20 L25 30"
                stroke="currentColor"
                stroke-width="1.5"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

pub fn atom() -> Html {
    html! {
        <svg class="sketch-icon" width="50" height="50" viewBox="0 0 50 50" aria-hidden="true">
            <circle cx="25" cy="25" r="3" fill="currentColor" />
            <ellipse cx="25" cy="25" rx="20" ry="8" stroke="currentColor" stroke-width="1.5" fill="none" transform="rotate(0 25 25)" />
            <ellipse cx="25" cy="25" rx="20" ry="8" stroke="currentColor" stroke-width="1.5" fill="none" transform="rotate(60 25 25)" />
            <ellipse cx="25" cy="25" rx="20" ry="8" stroke="currentColor" stroke-width="1.5" fill="none" transform="rotate(120 25 25)" />
        </svg>
    }
}

pub fn code_block() -> Html {
    html! {
        <svg class="sketch-icon" width="60" height="45" viewBox="0 0 60 45" aria-hidden="true">
            <rect x="5" y="5" width="50" height="35" rx="4" stroke="currentColor" stroke-width="1.5" fill="none" />
            <circle cx="12" cy="15" r="2" fill="currentColor" />
            <circle cx="20" cy="15" r="2" fill="currentColor" />
            <circle cx="28" cy="15" r="2" fill="currentColor" />
            <path
                d="M12 25 L18 25 M12 30 L25 30 M12 35 L20 35"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
            />
        </svg>
    }
}

pub fn lightbulb() -> Html {
    html! {
        <svg class="sketch-icon" width="40" height="55" viewBox="0 0 40 55" aria-hidden="true">
            <path
                d="M20 5 C28 5 35 12 35 20 C35 25 32 29 28 32 L28 40 L12 40 L12 32 C8 29 5 25 5 20 C5 12 12 5 20 5 Z"
                stroke="currentColor"
                stroke-width="1.5"
                fill="none"
            />
            <path d="M15 45 L25 45 M17 50 L23 50" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" />
        </svg>
    }
}

pub fn gear() -> Html {
    html! {
        <svg class="sketch-icon" width="50" height="50" viewBox="0 0 50 50" aria-hidden="true">
            <path
                d="M25 15 C30 15 35 20 35 25 C35 30 30 35 25 35 C20 35 15 30 15 25 C15 20 20 15 25 15 Z"
                stroke="currentColor"
                stroke-width="1.5"
                fill="none"
            />
            <path
                d="M25 5 L27 12 L23 12 Z M45 25 L38 27 L38 23 Z M25 45 L23 38 L27 38 Z M5 25 L12 23 L12 27 Z"
                stroke="currentColor"
                stroke-width="1.5"
                fill="none"
            />
        </svg>
    }
}

pub fn database_stack() -> Html {
    html! {
        <svg class="sketch-icon" width="45" height="60" viewBox="0 0 45 60" aria-hidden="true">
            <ellipse cx="22.5" cy="12" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
            <path
                d="M5.5 12 L5.5 48 C5.5 52 12 55 22.5 55 C33 55 39.5 52 39.5 48 L39.5 12"
                stroke="currentColor"
                stroke-width="1.5"
                fill="none"
            />
            <ellipse cx="22.5" cy="25" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
            <ellipse cx="22.5" cy="38" rx="17" ry="7" stroke="currentColor" stroke-width="1.5" fill="none" />
        </svg>
    }
}

fn glyph_svg(body: Html) -> Html {
    html! {
        <svg
            class="glyph"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

pub fn glyph(kind: Glyph) -> Html {
    match kind {
        Glyph::GitHub => glyph_svg(html! {
            <>
                <path d="M15 22 v-4 a4.8 4.8 0 0 0 -1 -3.5 c3 0 6 -2 6 -5.5 a5.4 5.4 0 0 0 -1.5 -3.8 a5 5 0 0 0 -0.1 -3.7 s-1.2 -0.3 -3.9 1.5 a13.4 13.4 0 0 0 -7 0 C4.8 1.2 3.6 1.5 3.6 1.5 a5 5 0 0 0 -0.1 3.7 A5.4 5.4 0 0 0 2 9 c0 3.5 3 5.5 6 5.5 a4.8 4.8 0 0 0 -1 3.5 V22" />
                <path d="M9 18 c-4.5 2 -5 -2 -7 -2" />
            </>
        }),
        Glyph::LinkedIn => glyph_svg(html! {
            <>
                <path d="M16 8 a6 6 0 0 1 6 6 v7 h-4 v-7 a2 2 0 0 0 -2 -2 a2 2 0 0 0 -2 2 v7 h-4 v-13 h4 v2" />
                <rect x="2" y="9" width="4" height="12" />
                <circle cx="4" cy="4" r="2" />
            </>
        }),
        Glyph::Mail => glyph_svg(html! {
            <>
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <polyline points="22,6 12,13 2,6" />
            </>
        }),
        Glyph::Code => glyph_svg(html! {
            <>
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </>
        }),
        Glyph::Database => glyph_svg(html! {
            <>
                <ellipse cx="12" cy="5" rx="9" ry="3" />
                <path d="M21 12 c0 1.66 -4 3 -9 3 s-9 -1.34 -9 -3" />
                <path d="M3 5 v14 c0 1.66 4 3 9 3 s9 -1.34 9 -3 V5" />
            </>
        }),
        Glyph::Palette => glyph_svg(html! {
            <>
                <circle cx="13.5" cy="6.5" r="0.5" />
                <circle cx="17.5" cy="10.5" r="0.5" />
                <circle cx="8.5" cy="7.5" r="0.5" />
                <circle cx="6.5" cy="12.5" r="0.5" />
                <path d="M12 2 C6.5 2 2 6.5 2 12 s4.5 10 10 10 c0.93 0 1.65 -0.75 1.65 -1.69 c0 -0.44 -0.18 -0.84 -0.44 -1.13 c-0.29 -0.29 -0.44 -0.65 -0.44 -1.12 a1.64 1.64 0 0 1 1.67 -1.67 h2 c3.05 0 5.56 -2.5 5.56 -5.55 C22 6 17.46 2 12 2 Z" />
            </>
        }),
        Glyph::Globe => glyph_svg(html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <line x1="2" y1="12" x2="22" y2="12" />
                <path d="M12 2 a15.3 15.3 0 0 1 4 10 a15.3 15.3 0 0 1 -4 10 a15.3 15.3 0 0 1 -4 -10 a15.3 15.3 0 0 1 4 -10 Z" />
            </>
        }),
    }
}

pub fn arrow_up_right() -> Html {
    glyph_svg(html! {
        <>
            <line x1="7" y1="17" x2="17" y2="7" />
            <polyline points="7 7 17 7 17 17" />
        </>
    })
}

pub fn calendar() -> Html {
    glyph_svg(html! {
        <>
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
            <line x1="16" y1="2" x2="16" y2="6" />
            <line x1="8" y1="2" x2="8" y2="6" />
            <line x1="3" y1="10" x2="21" y2="10" />
        </>
    })
}

pub fn clock_face() -> Html {
    glyph_svg(html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        </>
    })
}

#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    html! {
        <div class="floating-layer" aria-hidden="true">
            <div class="float-spot drift" style="top: 5rem; left: 4rem;">{paper_plane()}</div>
            <div class="float-spot float-gentle" style="top: 50%; left: 25%; animation-delay: 2s;">{atom()}</div>
            <div class="float-spot drift" style="top: 8rem; right: 5rem; animation-delay: 1s;">{code_block()}</div>
            <div class="float-spot float-gentle" style="bottom: 8rem; left: 5rem; animation-delay: 3s;">{lightbulb()}</div>
            <div class="float-spot drift" style="bottom: 10rem; right: 25%; animation-delay: 4s;">{gear()}</div>
            <div class="float-spot float-gentle" style="top: 66%; right: 4rem; animation-delay: 1.5s;">{database_stack()}</div>
        </div>
    }
}
