use std::rc::Rc;
use yew::prelude::*;

use super::browser::use_window_keydown;
use crate::projects::{Project, ProjectViewer, ViewerAction, GITHUB_PROFILE, PROJECTS};

impl Reducible for ProjectViewer {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn tag_list(project: &Project, class: &'static str) -> Html {
    html! {
        <div class="tag-list">
            { for project.tags.iter().map(|tag| html! {
                <span key={*tag} class={class}>{*tag}</span>
            }) }
        </div>
    }
}

/// Links inside a card must not open the modal.
fn stop_propagation() -> Callback<MouseEvent> {
    Callback::from(|event: MouseEvent| event.stop_propagation())
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    viewer: UseReducerDispatcher<ProjectViewer>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let open = {
        let viewer = props.viewer.clone();
        Callback::from(move |_: MouseEvent| viewer.dispatch(ViewerAction::Open(project)))
    };
    let open_details = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            open.emit(event);
        })
    };

    html! {
        <article class="project-card" onclick={open}>
            <div class="project-cover">
                if let Some(cover) = project.cover() {
                    <img src={cover} alt={project.title} loading="lazy" />
                }
            </div>
            <div class="project-body">
                { tag_list(project, "tag") }
                <h3>{project.title}</h3>
                <p class="muted">{project.description}</p>
                <div class="project-footer">
                    <div class="project-links">
                        <a href={project.demo_url} target="_blank" rel="noopener noreferrer" onclick={stop_propagation()} aria-label="Live demo">{"↗"}</a>
                        <a href={project.github_url} target="_blank" rel="noopener noreferrer" onclick={stop_propagation()} aria-label="Source code">{"</>"}</a>
                    </div>
                    <span class="details-link" onclick={open_details}>{"View details"}</span>
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    state: ProjectViewer,
    viewer: UseReducerDispatcher<ProjectViewer>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let Some(project) = props.state.selected() else {
        return html! {};
    };
    let dispatch = |action: ViewerAction| {
        let viewer = props.viewer.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            viewer.dispatch(action);
        })
    };

    html! {
        <div class="modal-backdrop" role="dialog" aria-modal="true" aria-label={project.title}>
            <div class="modal">
                <header class="modal-header">
                    <h3>{project.title}</h3>
                    <button type="button" class="icon-button" aria-label="Close" onclick={dispatch(ViewerAction::Close)}>{"✕"}</button>
                </header>

                <div class="modal-body">
                    <div class={classes!("gallery", format!("gallery-cols-{}", project.gallery_columns()))}>
                        { for project.images.iter().enumerate().map(|(index, image)| html! {
                            <button key={index} type="button" class="gallery-thumb" onclick={dispatch(ViewerAction::ShowImage(index))}>
                                <img src={*image} alt={format!("{} {}", project.title, index + 1)} loading="lazy" />
                            </button>
                        }) }
                    </div>

                    <p class="muted">{project.long_description}</p>
                    { tag_list(project, "tag tag-large") }

                    <footer class="modal-footer">
                        <div class="project-links">
                            <a class="button" href={project.demo_url} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                            <a class="button button-muted" href={project.github_url} target="_blank" rel="noopener noreferrer">{"Source Code"}</a>
                        </div>
                        <button type="button" class="button button-outline" onclick={dispatch(ViewerAction::Close)}>{"Close"}</button>
                    </footer>
                </div>
            </div>

            if let (Some(image), Some(index)) = (props.state.fullscreen_image(), props.state.fullscreen_index()) {
                <div class="fullscreen" onclick={dispatch(ViewerAction::HideImage)}>
                    <button type="button" class="icon-button fullscreen-close" aria-label="Close image" onclick={dispatch(ViewerAction::HideImage)}>{"✕"}</button>
                    if props.state.can_navigate() {
                        <button type="button" class="icon-button fullscreen-prev" aria-label="Previous image" onclick={dispatch(ViewerAction::Previous)}>{"‹"}</button>
                    }
                    <img
                        src={image}
                        alt={format!("{} {}", project.title, index + 1)}
                        onclick={stop_propagation()}
                    />
                    if props.state.can_navigate() {
                        <button type="button" class="icon-button fullscreen-next" aria-label="Next image" onclick={dispatch(ViewerAction::Next)}>{"›"}</button>
                    }
                    <p class="fullscreen-counter">{format!("{} / {}", index + 1, project.images.len())}</p>
                </div>
            }
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let viewer = use_reducer(ProjectViewer::default);

    {
        let dispatcher = viewer.dispatcher();
        use_window_keydown(Callback::from(move |key: String| {
            if let Some(action) = ViewerAction::from_key(&key) {
                dispatcher.dispatch(action);
            }
        }));
    }

    html! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section-title">{"Featured "}<span class="accent">{"Projects"}</span></h2>
                <p class="section-lead muted">{"Here are some of my projects."}</p>

                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project} viewer={viewer.dispatcher()} />
                    }) }
                </div>

                <div class="centered">
                    <a class="button" href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer">{"Check My Github →"}</a>
                </div>
            </div>

            <ProjectModal state={*viewer} viewer={viewer.dispatcher()} />
        </section>
    }
}
