// Privacy policy document
use crate::sections::Footer;
use leptos::prelude::*;
use stormsense_core::privacy::{Block, PolicySection, privacy_policy};

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    let doc = privacy_policy();

    view! {
        <div class="policy-page">
            <article class="policy">
                <h1 class="policy-title">{doc.title}</h1>
                <p class="policy-updated">"Last Updated: " {doc.last_updated}</p>
                <div class="policy-body">
                    <p>{doc.intro}</p>
                    {doc
                        .sections
                        .into_iter()
                        .map(|section| view! { <PolicySectionView section=section /> })
                        .collect_view()}
                </div>
            </article>
            <Footer pinned=true />
        </div>
    }
}

#[component]
fn PolicySectionView(section: PolicySection) -> impl IntoView {
    let heading = section.numbered_heading();
    view! {
        <section class="policy-section">
            <h2>{heading}</h2>
            {section.blocks.into_iter().map(render_block).collect_view()}
        </section>
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        Block::Labeled { label, text } => {
            view! {
                <p>
                    <strong>{label} ":"</strong>
                    " "
                    {text}
                </p>
            }
            .into_any()
        }
        Block::Bullets(items) => {
            view! { <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul> }
                .into_any()
        }
        Block::Contact { name, email } => {
            view! {
                <div class="policy-contact">
                    <p class="policy-contact-name">{name}</p>
                    <a href=format!("mailto:{email}")>{email}</a>
                </div>
            }
            .into_any()
        }
    }
}
