use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, MouseEvent};
use yew::prelude::*;

use crate::buttons::{CleanButton, CleanVariant};
use crate::clock::ClockReadout;
use crate::content::{
    Article, ARTICLES, ARTICLES_HUB, CONTACT_EMAIL, EXPERIENCE, SITE_OWNER, SOCIALS, TECH_AREAS,
};
use crate::icons;
use crate::theme_context::use_theme;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Work", "#work"),
    ("Articles", "#articles"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[derive(Properties, PartialEq)]
pub struct HoverProps {
    pub on_hover: Callback<bool>,
}

#[function_component(HeaderBar)]
pub fn header_bar(props: &HoverProps) -> Html {
    let handle = use_theme();

    let onclick = {
        let toggle = handle.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(true))
    };

    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(false))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <div class="brand">{SITE_OWNER}</div>

                <nav class="site-nav" aria-label="Sections">
                    { for NAV_ITEMS.iter().map(|(label, target)| html! {
                        <a
                            key={*label}
                            href={*target}
                            onmouseenter={onmouseenter.clone()}
                            onmouseleave={onmouseleave.clone()}
                        >
                            {*label}
                        </a>
                    }) }
                </nav>

                <div class="header-tools">
                    <ClockReadout />
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={handle.theme.toggle_label()}
                        aria-pressed={handle.theme.pressed().to_string()}
                        onclick={onclick}
                        onmouseenter={onmouseenter.clone()}
                        onmouseleave={onmouseleave.clone()}
                    >
                        <span aria-hidden="true">{handle.theme.icon()}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero(props: &HoverProps) -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="section-inner">
                <div class="hero-badge">
                    <span class="pulse-dot" aria-hidden="true"></span>
                    {"Open to opportunities"}
                </div>

                <h1 id="hero-heading">
                    {"The interactive "}
                    <span class="accent-underline">{"full-stack"}</span>
                    {" developer"}
                </h1>

                <p class="hero-tagline">
                    {"Bridge between a failing system and a working solution: Where creativity meets functionality, and innovation drives progress."}
                </p>

                <div class="hero-actions">
                    <CleanButton href="#work" class={classes!("wide-button")} on_hover={props.on_hover.clone()}>
                        {"My Projects"}
                    </CleanButton>
                    <CleanButton href="#contact" class={classes!("wide-button")} on_hover={props.on_hover.clone()}>
                        {"Let's Connect"}
                    </CleanButton>
                </div>

                <ul class="tech-grid">
                    { for TECH_AREAS.iter().map(|area| html! {
                        <li key={area.name} class="tech-chip">
                            {icons::glyph(area.icon)}
                            <span>{area.name}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ArticleCardProps {
    article: Article,
    index: usize,
    on_hover: Callback<bool>,
}

#[function_component(ArticleCard)]
fn article_card(props: &ArticleCardProps) -> Html {
    let revealed = use_state(|| false);
    let card_ref = use_node_ref();

    {
        let revealed = revealed.clone();
        let card_ref = card_ref.clone();
        use_effect_with((), move |_| {
            let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    revealed.set(true);
                }
            });

            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok();
            if let (Some(observer), Some(card)) = (observer.as_ref(), card_ref.cast::<Element>()) {
                observer.observe(&card);
            }

            move || {
                if let Some(observer) = observer.as_ref() {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let article = props.article;
    let delay_style = format!("transition-delay: {:.1}s;", props.index as f64 * 0.1);

    html! {
        <article
            ref={card_ref}
            class={classes!("article-card", revealed.then_some("is-revealed"))}
            style={delay_style}
        >
            <div class="article-meta">
                <span class="meta-item">{icons::calendar()}{article.date}</span>
                <span class="meta-item">{icons::clock_face()}{article.read_time}</span>
            </div>

            <h3 class="article-title">{article.title}</h3>
            <p class="article-excerpt">{article.excerpt}</p>

            <div class="article-foot">
                <ul class="tag-list">
                    { for article.tags.iter().map(|tag| html! {
                        <li key={*tag} class="tag">{*tag}</li>
                    }) }
                </ul>
                <CleanButton
                    href={article.link}
                    variant={CleanVariant::Ghost}
                    external={true}
                    on_hover={props.on_hover.clone()}
                >
                    {"Read More"}
                    {icons::arrow_up_right()}
                </CleanButton>
            </div>
        </article>
    }
}

#[function_component(ArticlesSection)]
pub fn articles_section(props: &HoverProps) -> Html {
    html! {
        <section id="articles" class="section" aria-labelledby="articles-heading">
            <div class="section-inner">
                <div class="section-intro">
                    <h2 id="articles-heading">{"Latest Articles"}</h2>
                    <p class="section-sub">
                        {"Sharing my learning journey and insights about web development, programming, and technology."}
                    </p>
                </div>

                <div class="article-grid">
                    { for ARTICLES.iter().enumerate().map(|(index, article)| html! {
                        <ArticleCard
                            key={article.title}
                            article={*article}
                            index={index}
                            on_hover={props.on_hover.clone()}
                        />
                    }) }
                </div>

                <div class="articles-more">
                    <CleanButton href={ARTICLES_HUB} external={true} on_hover={props.on_hover.clone()}>
                        {"View All Articles"}
                        {icons::arrow_up_right()}
                    </CleanButton>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section" aria-labelledby="about-heading">
            <div class="section-inner">
                <div class="about-grid">
                    <div class="panel">
                        <h2 id="about-heading">{"About Me"}</h2>
                        <div class="about-copy">
                            <p>
                                {"Hi, I'm Priyanshu — a full-stack developer with a strong focus on frontend development. I have 3+ years of experience building modern, scalable web applications using React.js, Next.js, TypeScript, and Node.js. I enjoy crafting clean, responsive UIs with a strong emphasis on user experience, performance optimization, and maintainable code."}
                            </p>
                            <p>
                                {"On the backend, I've built APIs using Express.js, implemented JWT-based authentication, and handled asynchronous jobs using Redis and RabbitMQ. I also work with MongoDB for data modeling and persistence."}
                            </p>
                            <p>
                                {"I'm passionate about building products that are both functional and enjoyable to use — and I'm always looking to improve how I write code, structure systems, and collaborate with teams."}
                            </p>
                        </div>
                    </div>

                    <div class="panel">
                        <h3 class="journey-heading">{"My Journey"}</h3>
                        <div class="journey-list">
                            { for EXPERIENCE.iter().map(|entry| html! {
                                <div key={entry.company} class="journey-entry">
                                    <div class="journey-head">
                                        <h4>{entry.role}</h4>
                                        <span class="period-pill">{entry.period}</span>
                                    </div>
                                    <p class="journey-company">{entry.company}</p>
                                    <p class="journey-description">{entry.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &HoverProps) -> Html {
    html! {
        <section id="contact" class="section" aria-labelledby="contact-heading">
            <div class="section-inner">
                <div class="panel contact-panel">
                    <h2 id="contact-heading">{"Let's Connect"}</h2>
                    <p class="section-sub">
                        {"I'm always excited to discuss new opportunities, collaborate on interesting projects, or just chat about technology and development."}
                    </p>

                    <div class="contact-actions">
                        <CleanButton
                            href={CONTACT_EMAIL}
                            class={classes!("wide-button")}
                            on_hover={props.on_hover.clone()}
                        >
                            {"Get In Touch"}
                        </CleanButton>
                    </div>

                    <div class="social-row">
                        { for SOCIALS.iter().map(|social| html! {
                            <CleanButton
                                key={social.label}
                                href={social.href}
                                variant={CleanVariant::Ghost}
                                class={classes!("icon-button")}
                                external={true}
                                aria_label={social.label}
                                on_hover={props.on_hover.clone()}
                            >
                                {icons::glyph(social.icon)}
                            </CleanButton>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{"© 2025 Priyanshu Tiwari. All rights reserved."}</p>
                <p>{"Built with Rust & Yew"}</p>
            </div>
        </footer>
    }
}
