use yew::prelude::*;

use crate::skills::{filter_skills, level_width, SkillFilter, SKILLS};

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let filter = use_state_eq(SkillFilter::default);
    let visible = filter_skills(SKILLS, *filter);

    html! {
        <section id="skills" class="section section-tinted">
            <div class="container">
                <h2 class="section-title">{"My "}<span class="accent">{"Skills"}</span></h2>

                <div class="filter-bar" role="tablist">
                    { for SkillFilter::options().map(|option| {
                        let selected = *filter == option;
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(option))
                        };
                        html! {
                            <button
                                key={option.label()}
                                type="button"
                                role="tab"
                                aria-selected={selected.to_string()}
                                class={classes!("filter-button", selected.then_some("is-active"))}
                                onclick={onclick}
                            >
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>

                if visible.is_empty() {
                    <p class="empty-state muted">{"No skills found in this category"}</p>
                } else {
                    <div class="skill-grid">
                        { for visible.iter().map(|skill| html! {
                            <div key={skill.name} class="skill-card">
                                <div class="skill-heading">
                                    <span class="skill-icon">
                                        <img src={skill.icon} alt={skill.name} loading="lazy" />
                                    </span>
                                    <h3>{skill.name}</h3>
                                </div>
                                <div class="skill-meta">
                                    <span class="muted">{"Proficiency"}</span>
                                    <span class="accent">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-bar-fill" style={format!("width: {};", level_width(skill.level))}></div>
                                </div>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}
