use yew::prelude::*;

struct Testimonial {
    company_logo: &'static str,
    company_alt: &'static str,
    quote: &'static str,
    avatar: &'static str,
    name: &'static str,
    title: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        company_logo: "/nlmtd_logo.svg",
        company_alt: "nlmtd logo",
        quote: "Our scheduling overview makes it hard to see who is really looking for new projects, let alone what kind of projects.",
        avatar: "/Wopke-Dost-1.1-scaled-e1749050679512.webp",
        name: "Wopke Dost",
        title: "Director, nlmtd",
    },
    Testimonial {
        company_logo: "/nlmtd_logo.svg",
        company_alt: "nlmtd logo",
        quote: "How might we shape perfect project team in less the 5 minutes? Proflr is giving us the tool to do so.",
        avatar: "/Leonard-Bukenya-1.1-scaled-e1749042607447.webp",
        name: "Leonard Bukenya",
        title: "Business Development, nlmtd",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <h2 class="section-title">{"Trusted by leading companies"}</h2>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial-card" key={t.name}>
                        <div class="testimonial-company">
                            <img src={t.company_logo} alt={t.company_alt} style="height: 24px;" />
                        </div>
                        <p class="testimonial-text">{format!("\"{}\"", t.quote)}</p>
                        <div class="testimonial-author">
                            <div class="author-avatar">
                                <img src={t.avatar} alt={t.name} />
                            </div>
                            <div class="author-info">
                                <div class="author-name">{t.name}</div>
                                <div class="author-title">{t.title}</div>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .testimonials {
                        padding: 80px 0;
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 32px;
                        margin-top: 48px;
                    }
                    .testimonial-card {
                        background: white;
                        border-radius: 16px;
                        padding: 32px;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                        display: flex;
                        flex-direction: column;
                    }
                    .testimonial-company {
                        margin-bottom: 24px;
                    }
                    .testimonial-text {
                        font-size: 18px;
                        line-height: 1.6;
                        color: #2D3C33;
                        flex: 1;
                        margin-bottom: 24px;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .author-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        overflow: hidden;
                    }
                    .author-avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .author-name {
                        font-weight: 600;
                        color: #2D3C33;
                    }
                    .author-title {
                        font-size: 14px;
                        color: #666;
                    }
                    @media (max-width: 768px) {
                        .testimonial-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
