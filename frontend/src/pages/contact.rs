use yew::prelude::*;

use crate::contact::form::ContactForm;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    // Land at the top when navigating here from another page
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        max-width: 960px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .contact-section h1 {
                        font-size: 2.2rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-intro {
                        color: #555;
                        margin-bottom: 2rem;
                    }
                    .contact-form {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.25rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                    }
                    .form-group.full-width,
                    .checkbox-group {
                        grid-column: 1 / -1;
                    }
                    .checkbox-group {
                        flex-direction: row;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .checkbox-group .error-message {
                        flex-basis: 100%;
                    }
                    .form-group input,
                    .form-group select,
                    .form-group textarea {
                        padding: 0.75rem;
                        border: 1px solid #ccc;
                        border-radius: 6px;
                        font: inherit;
                    }
                    .btn-primary[disabled] {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .success-message {
                        text-align: center;
                        padding: 3rem 1rem;
                    }
                    .success-icon {
                        font-size: 3rem;
                        color: #28a745;
                    }
                    @media (max-width: 768px) {
                        .contact-form {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <h1>{"Get in Touch"}</h1>
            <p class="contact-intro">
                {"Tell us about your project and we'll get back to you within one business day."}
            </p>
            <ContactForm />
        </section>
    }
}
