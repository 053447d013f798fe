use yew::prelude::*;

use super::browser::scroll_to_section;
use super::RESUME_PATH;
use crate::sections::Section;

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Web Development",
        "Building modern, responsive, and user-friendly web applications using the latest technologies.",
    ),
    (
        "UI/UX Design",
        "Crafting intuitive and engaging user experiences with a focus on usability and aesthetics.",
    ),
    (
        "Project Management",
        "Leading projects from conception to completion with agile methodologies and effective communication.",
    ),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let get_in_touch = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_section(Section::Contact);
    });

    html! {
        <section id="about" class="section">
            <div class="container">
                <h2 class="section-title">{"About "}<span class="accent">{"Me"}</span></h2>

                <div class="about-grid">
                    <div class="about-copy">
                        <h3>{"Passionate Web Developer & Cyber Security Enthusiast"}</h3>
                        <p class="muted">
                            {"I'm a web developer with a strong passion for creating interactive and responsive web applications. With experience in both frontend and backend technologies, I enjoy turning complex problems into elegant solutions."}
                        </p>
                        <p class="muted">
                            {"My journey in cyber security has equipped me with a keen eye for vulnerabilities and a commitment to building secure applications. I'm constantly learning and adapting to new technologies to stay at the forefront of web development."}
                        </p>
                        <div class="about-actions">
                            <a class="button" href={Section::Contact.href()} onclick={get_in_touch}>{"Get In Touch"}</a>
                            <a class="button button-outline" href={RESUME_PATH} download="">{"Download CV"}</a>
                        </div>
                    </div>

                    <div class="about-highlights">
                        { for HIGHLIGHTS.iter().map(|(title, body)| html! {
                            <div key={*title} class="card highlight-card">
                                <h4>{*title}</h4>
                                <p class="muted">{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
