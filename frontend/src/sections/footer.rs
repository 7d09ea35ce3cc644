use yew::prelude::*;

use crate::content::{BRAND, COPYRIGHT, FOOTER_GROUPS, LEGAL_LINKS, SOCIAL_LINKS, TAGLINE};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="footer">
            <style>
                {r#"
                    .footer {
                        padding: 5rem 0 2rem;
                        border-top: 1px solid var(--border);
                    }
                    .footer-content {
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr);
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-section h3,
                    .footer-section h4 {
                        margin: 0 0 1rem;
                    }
                    .footer-section p {
                        color: var(--text-muted);
                    }
                    .footer-section ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-section li {
                        margin-bottom: 0.6rem;
                    }
                    .footer a {
                        color: var(--text-muted);
                        text-decoration: none;
                    }
                    .footer a:hover {
                        color: var(--text);
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                        font-size: 1.4rem;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        color: var(--text-muted);
                        font-size: 0.9rem;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .footer-content {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3>{BRAND}</h3>
                        <p>{TAGLINE}</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href="#" aria-label={social.label}>{social.glyph}</a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_GROUPS.iter().map(|group| html! {
                        <div class="footer-section">
                            <h4>{group.title}</h4>
                            <ul>
                                { for group.links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <div class="footer-links">
                        { for LEGAL_LINKS.iter().map(|link| html! {
                            <a href="#">{*link}</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
