use web_sys::window;
use yew::prelude::*;

use crate::cursor::CursorOverlay;
use crate::icons::FloatingElements;
use crate::sections::{AboutSection, ArticlesSection, ContactSection, Footer, HeaderBar, Hero};
use crate::stack::ProjectStack;
use crate::theme_context::ThemeProvider;

#[function_component(App)]
pub fn app() -> Html {
    let cursor_engaged = use_state(|| false);

    let on_hover = {
        let cursor_engaged = cursor_engaged.clone();
        Callback::from(move |engaged: bool| cursor_engaged.set(engaged))
    };

    html! {
        <ThemeProvider>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <CursorOverlay engaged={*cursor_engaged} />
            <FloatingElements />
            <HeaderBar on_hover={on_hover.clone()} />
            <main id="content">
                <Hero on_hover={on_hover.clone()} />
                <ProjectStack on_hover={on_hover.clone()} />
                <ArticlesSection on_hover={on_hover.clone()} />
                <AboutSection />
                <ContactSection on_hover={on_hover.clone()} />
            </main>
            <Footer />
        </ThemeProvider>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
