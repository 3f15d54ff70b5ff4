use gloo_events::EventListener;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::buttons::{MagneticButton, MagneticVariant};
use crate::content::{index_label, Glyph, Project, PROJECTS};
use crate::dom::{viewport_height, FrameGate};
use crate::icons;
use crate::motion::{scroll_progress, stack_params};

#[derive(Properties, PartialEq)]
pub struct StackCardProps {
    pub project: Project,
    pub index: usize,
    pub total: usize,
    pub on_hover: Callback<bool>,
}

#[function_component(StackCard)]
pub fn stack_card(props: &StackCardProps) -> Html {
    let progress = use_state(|| 0.0_f64);
    let slot_ref = use_node_ref();

    {
        let progress = progress.clone();
        let slot_ref = slot_ref.clone();
        use_effect_with((), move |_| {
            let measure = move || {
                let Some(slot) = slot_ref.cast::<Element>() else {
                    return;
                };
                let rect = slot.get_bounding_client_rect();
                progress.set(scroll_progress(rect.top(), rect.height(), viewport_height()));
            };

            measure();

            let listener = window().map(|win| {
                let gate = FrameGate::new();
                EventListener::new(&win, "scroll", move |_| {
                    let measure = measure.clone();
                    gate.request(move || measure());
                })
            });

            move || drop(listener)
        });
    }

    let params = stack_params(*progress, props.index, props.total);
    let card_style = format!(
        "transform: translateY({:.2}px) scale({:.4}); opacity: {:.3}; z-index: {};",
        params.offset_px, params.scale, params.opacity, params.layer
    );

    let project = props.project;

    html! {
        <div class="stack-slot" ref={slot_ref}>
            <div class="stack-card" style={card_style}>
                <div class="stack-card-grid">
                    <div class="stack-card-copy">
                        <div class="stack-card-meta">
                            <span class="year-pill">{project.year}</span>
                            <ul class="tag-list">
                                { for project.tags.iter().map(|tag| html! {
                                    <li key={*tag} class="tag">{*tag}</li>
                                }) }
                            </ul>
                        </div>

                        <h3 class="stack-card-title">{project.title}</h3>
                        <p class="stack-card-description">{project.description}</p>

                        <div class="stack-card-actions">
                            <MagneticButton href={project.demo} on_hover={props.on_hover.clone()}>
                                {"View Project"}
                                {icons::arrow_up_right()}
                            </MagneticButton>
                            <MagneticButton
                                href={project.repo}
                                variant={MagneticVariant::Outline}
                                on_hover={props.on_hover.clone()}
                            >
                                {icons::glyph(Glyph::GitHub)}
                                {"Code"}
                            </MagneticButton>
                        </div>
                    </div>

                    <div class="stack-card-media">
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <span class="index-badge">{index_label(props.index)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectStackProps {
    pub on_hover: Callback<bool>,
}

#[function_component(ProjectStack)]
pub fn project_stack(props: &ProjectStackProps) -> Html {
    html! {
        <section id="work" class="section" aria-labelledby="work-heading">
            <div class="section-inner wide">
                <div class="section-intro">
                    <h2 id="work-heading">{"Selected Work"}</h2>
                    <p class="section-sub">
                        {"A collection of projects that showcase my approach to solving complex design and development challenges."}
                    </p>
                    <div class="stack-legend" aria-hidden="true">
                        <div class="legend-bars">
                            <span></span>
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                        <span class="legend-label">{"Call Stack (LIFO)"}</span>
                    </div>
                </div>

                <div class="stack-list">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <StackCard
                            key={project.title}
                            project={*project}
                            index={index}
                            total={PROJECTS.len()}
                            on_hover={props.on_hover.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
