use yew::prelude::*;

use crate::chat::ChatWidget;
use crate::components::reveal::Reveal;
use crate::contact::ContactForm;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Cloud Migration & Infrastructure",
        blurb: "Move workloads to AWS, Azure, or GCP with zero-surprise cutovers and right-sized spend.",
    },
    Service {
        title: "Security & Compliance",
        blurb: "Audits, hardening, and compliance programs that hold up under real scrutiny.",
    },
    Service {
        title: "Application Development",
        blurb: "Custom software built around your workflows, not the other way around.",
    },
    Service {
        title: "Managed IT Support",
        blurb: "24/7 monitoring and support plans so incidents get fixed before customers notice.",
    },
    Service {
        title: "Data Analytics",
        blurb: "Turn operational data into dashboards and decisions your team actually uses.",
    },
    Service {
        title: "DevOps Solutions",
        blurb: "CI/CD, infrastructure as code, and release automation that shortens every cycle.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div id="top" class="home-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #1a1a1a;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 10;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo {
                        font-weight: bold;
                        font-size: 1.25rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                        margin-left: 1.5rem;
                    }
                    .nav-link:hover {
                        color: #7EB2FF;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #fff;
                        margin: 5px 0;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            right: 0;
                            background: rgba(26, 26, 26, 0.98);
                            padding: 1rem 2rem;
                        }
                        .nav-right.mobile-menu-open { display: block; }
                        .nav-right .nav-link {
                            display: block;
                            margin: 0.75rem 0;
                        }
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 6rem 1.5rem 3rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero p {
                        max-width: 560px;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.15rem;
                        margin-bottom: 2rem;
                    }
                    .cta-button {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 8px;
                        background: #1E90FF;
                        color: #fff;
                        text-decoration: none;
                        font-weight: bold;
                    }
                    section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    section h2 {
                        text-align: center;
                        font-size: 2rem;
                        margin-bottom: 2.5rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .service-card h3 {
                        margin-top: 0;
                        color: #7EB2FF;
                    }
                    .service-card p {
                        color: rgba(255, 255, 255, 0.75);
                    }
                    .fade-up {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .fade-up.show {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>

            <div class="hero">
                <h1>{"IT that moves your business forward"}</h1>
                <p>
                    {"TechVantage Solutions plans, builds, and runs the cloud, security, and \
                      software foundations growing companies depend on."}
                </p>
                <a class="cta-button" href="#contact">{"Book a Free Consultation"}</a>
            </div>

            <section id="services">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Reveal class="service-card">
                            <h3>{ service.title }</h3>
                            <p>{ service.blurb }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="contact">
                <Reveal>
                    <h2>{"Request a Consultation"}</h2>
                    <ContactForm />
                </Reveal>
            </section>

            <ChatWidget />
        </div>
    }
}
