//! Display strings for every page, one table per language.

#[derive(Debug)]
pub struct Translations {
    pub navbar: NavbarStrings,
    pub about: AboutStrings,
    pub benefits: BenefitsStrings,
    pub services: ServicesStrings,
    pub help_cards: HelpCardsStrings,
    pub qualifications: QualificationsStrings,
    pub contact: ContactStrings,
    pub blog_showcase: BlogShowcaseStrings,
    pub blog: BlogStrings,
    pub resources: ResourcesStrings,
    pub login: LoginStrings,
    pub admin: AdminStrings,
    pub footer: FooterStrings,
    pub dates: DateStrings,
    pub seo: SeoStrings,
}

#[derive(Debug)]
pub struct NavbarStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub contact: &'static str,
    pub more: &'static str,
    pub blog: &'static str,
    pub resources: &'static str,
    pub admin: &'static str,
    pub admin_portal: &'static str,
    /// Tooltip of the language toggle, naming the other language.
    pub switch_language: &'static str,
}

#[derive(Debug)]
pub struct Approach {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug)]
pub struct AboutStrings {
    pub licensed: &'static str,
    pub experience: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Phrase inside `description` rendered emphasised.
    pub cbt_highlight: &'static str,
    pub approaches: &'static [Approach],
    pub areas_title: &'static str,
    pub specialties: &'static [&'static str],
    pub cta: &'static str,
    pub cta_subtext: &'static str,
}

#[derive(Debug)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug)]
pub struct BenefitsStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub cta_subtext: &'static str,
    pub cards: &'static [FeatureCard],
}

#[derive(Debug)]
pub struct ServiceCard {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub price: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub features: &'static [&'static str],
}

#[derive(Debug)]
pub struct ServicesStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub most_popular: &'static str,
    pub per_session: &'static str,
    pub book_now: &'static str,
    pub visit_referral: &'static str,
    pub cards: &'static [ServiceCard],
    pub insurance_note: &'static str,
    pub insurance_text: &'static str,
}

#[derive(Debug)]
pub struct HelpCardsStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub quote: &'static str,
    pub cards: &'static [FeatureCard],
}

#[derive(Debug)]
pub struct QualificationCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

#[derive(Debug)]
pub struct QualificationsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub cards: &'static [QualificationCard],
}

#[derive(Debug)]
pub struct StepStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug)]
pub struct ContactErrorStrings {
    pub name_required: &'static str,
    pub name_too_short: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub message_required: &'static str,
    pub message_too_short: &'static str,
}

#[derive(Debug)]
pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Headings of the name, email, message and review steps.
    pub steps: [StepStrings; 4],
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub review_name: &'static str,
    pub review_email: &'static str,
    pub review_message: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub send_button: &'static str,
    pub sending: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub response_time: &'static str,
    pub errors: ContactErrorStrings,
}

#[derive(Debug)]
pub struct BlogShowcaseStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub read_more: &'static str,
    pub view_all: &'static str,
    pub min_read: &'static str,
    pub coming_soon: &'static str,
    pub coming_soon_desc: &'static str,
}

#[derive(Debug)]
pub struct BlogStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub load_failed_title: &'static str,
    pub load_failed_text: &'static str,
    pub retry: &'static str,
    pub empty_title: &'static str,
    pub empty_text: &'static str,
    pub professional_insight: &'static str,
    pub article_singular: &'static str,
    pub article_plural: &'static str,
}

#[derive(Debug)]
pub struct ResourcesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub load_failed_title: &'static str,
    pub load_failed_text: &'static str,
    pub retry: &'static str,
    pub empty_title: &'static str,
    pub empty_text: &'static str,
    pub check_back: &'static str,
    pub visit: &'static str,
    pub added: &'static str,
}

#[derive(Debug)]
pub struct LoginStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub email_placeholder: &'static str,
    pub password_placeholder: &'static str,
    pub submit: &'static str,
    pub authenticating: &'static str,
    /// The one message shown for any rejected sign-in.
    pub invalid_credentials: &'static str,
    pub secure_note: &'static str,
}

#[derive(Debug)]
pub struct AdminNotificationStrings {
    pub failed_load_blogs: &'static str,
    pub failed_load_resources: &'static str,
    pub fill_all_fields: &'static str,
    pub invalid_url: &'static str,
    pub blog_published: &'static str,
    pub blog_publish_failed: &'static str,
    pub resource_saved: &'static str,
    pub resource_save_failed: &'static str,
    pub confirm_delete_blog: &'static str,
    pub blog_deleted: &'static str,
    pub blog_delete_failed: &'static str,
    pub confirm_delete_resource: &'static str,
    pub resource_deleted: &'static str,
    pub resource_delete_failed: &'static str,
}

#[derive(Debug)]
pub struct AdminStrings {
    pub loading: &'static str,
    pub dashboard: &'static str,
    pub subtitle: &'static str,
    pub create_tab: &'static str,
    pub manage_tab: &'static str,
    pub create_blog_title: &'static str,
    pub blog_title_placeholder: &'static str,
    pub blog_content_placeholder: &'static str,
    pub publishing: &'static str,
    pub publish_button: &'static str,
    pub add_resource_title: &'static str,
    pub resource_title_placeholder: &'static str,
    pub resource_url_placeholder: &'static str,
    pub resource_desc_placeholder: &'static str,
    pub saving: &'static str,
    pub save_button: &'static str,
    pub manage_blogs_title: &'static str,
    pub no_blogs_message: &'static str,
    pub by: &'static str,
    pub delete_button: &'static str,
    pub manage_resources_title: &'static str,
    pub no_resources_message: &'static str,
    pub logged_in_as: &'static str,
    pub logout: &'static str,
    pub confirm_yes: &'static str,
    pub confirm_no: &'static str,
    pub notifications: AdminNotificationStrings,
}

#[derive(Debug)]
pub struct FooterStrings {
    pub professional_note: &'static str,
    pub services: &'static str,
    pub crafted_with: &'static str,
    pub for_wellbeing: &'static str,
    pub all_rights: &'static str,
    pub licensed_psychologist: &'static str,
    pub confidential_secure: &'static str,
}

/// Text placed around a number, e.g. `"Hace "` and `" días"`.
#[derive(Debug)]
pub struct Affix {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Affix {
    #[must_use]
    pub fn around(&self, count: i64) -> String {
        format!("{}{count}{}", self.prefix, self.suffix)
    }
}

#[derive(Debug)]
pub struct DateStrings {
    pub today: &'static str,
    pub yesterday: &'static str,
    pub days_ago: Affix,
    pub weeks_ago: Affix,
    pub months: [&'static str; 12],
}

#[derive(Debug)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

#[derive(Debug)]
pub struct SeoStrings {
    pub site_name: &'static str,
    /// `og:locale` value.
    pub locale: &'static str,
    pub home: PageMeta,
    pub blog: PageMeta,
    pub resources: PageMeta,
    pub login: PageMeta,
    pub admin: PageMeta,
}

pub static ENGLISH: Translations = Translations {
    navbar: NavbarStrings {
        home: "Home",
        about: "About",
        services: "Services",
        contact: "Contact",
        more: "More",
        blog: "Blog",
        resources: "Resources",
        admin: "Admin",
        admin_portal: "Admin Portal",
        switch_language: "Switch to Spanish",
    },
    about: AboutStrings {
        licensed: "Licensed",
        experience: "Safe Space",
        name: "Dr. Lorena",
        title: "Licensed Clinical Psychologist",
        description: "Specializing in Cognitive Behavioral Therapy, mindfulness practices, and trauma-informed care. I provide evidence-based therapy tailored to your unique journey toward healing and growth.",
        cbt_highlight: "Cognitive Behavioral Therapy",
        approaches: &[
            Approach { title: "Evidence-Based", desc: "Scientifically proven methods" },
            Approach { title: "Personalized", desc: "Tailored to your needs" },
            Approach { title: "Confidential", desc: "Safe, private space" },
            Approach { title: "Sustainable", desc: "Long-term healing" },
        ],
        areas_title: "Areas of Focus",
        specialties: &[
            "Anxiety Disorders",
            "Depression",
            "Trauma Recovery",
            "Life Transitions",
            "Mindfulness",
            "Relationship Issues",
            "Self-Esteem",
            "Stress Management",
        ],
        cta: "Start Your Journey",
        cta_subtext: "Free 15-minute consultation • Flexible scheduling",
    },
    benefits: BenefitsStrings {
        badge: "Proven Results",
        title: "Transform Your Mental Health",
        subtitle: "Experience meaningful change through evidence-based therapy approaches tailored to your unique needs and goals",
        cta: "Start Your Journey Today",
        cta_subtext: "Take the first step towards positive change",
        cards: &[
            FeatureCard {
                title: "Reduce Anxiety",
                description: "Learn practical skills and evidence-based techniques to effectively manage worry, panic attacks, and anxious thoughts in daily life.",
                features: &["CBT Techniques", "Mindfulness Practices", "Breathing Exercises"],
            },
            FeatureCard {
                title: "Improve Mood",
                description: "Develop behavioral activation strategies and cognitive tools to lift mood, increase motivation, and combat depressive symptoms.",
                features: &["Behavioral Activation", "Mood Tracking", "Positive Psychology"],
            },
            FeatureCard {
                title: "Better Relationships",
                description: "Enhance communication skills, establish healthy boundaries, and build more meaningful connections with others.",
                features: &["Communication Skills", "Boundary Setting", "Conflict Resolution"],
            },
            FeatureCard {
                title: "Trauma Recovery",
                description: "Experience paced, supportive trauma care with evidence-based approaches for healing and post-traumatic growth.",
                features: &["Trauma-Informed Care", "EMDR Techniques", "Safety Planning"],
            },
        ],
    },
    services: ServicesStrings {
        badge: "Transparent Pricing",
        title: "Services & Investment",
        subtitle: "Invest in your wellbeing with transparent, accessible pricing for professional therapeutic support",
        most_popular: "Most Popular",
        per_session: "per session",
        book_now: "Book Now",
        visit_referral: "Visit Referral",
        cards: &[
            ServiceCard {
                title: "Individual Therapy",
                subtitle: None,
                description: "Personalized 50-minute one-on-one sessions focused on your unique needs and goals",
                price: Some("50 €"),
                duration: Some("50 min session"),
                features: &["Personalized Approach", "Confidential Space", "Weekly Sessions"],
            },
            ServiceCard {
                title: "Couples Counseling",
                subtitle: None,
                description: "50-minute sessions designed to improve communication and strengthen relationships",
                price: Some("50 €"),
                duration: Some("50 min session"),
                features: &["Communication Skills", "Conflict Resolution", "Relationship Growth"],
            },
            ServiceCard {
                title: "Specialized Referral",
                subtitle: Some("Dr. María Martínez"),
                description: "For specialized trauma-focused EMDR, complex PTSD, and advanced therapeutic interventions",
                price: None,
                duration: None,
                features: &["EMDR Therapy", "Trauma Specialist", "Advanced Interventions"],
            },
        ],
        insurance_note: "Insurance & Payment:",
        insurance_text: "Many insurance plans are accepted. Sliding scale available for those in need. Free 15-minute consultation to ensure we're the right fit.",
    },
    help_cards: HelpCardsStrings {
        badge: "Specialized Support",
        title: "How Lorena Can Help",
        subtitle: "Expert therapeutic support tailored to your unique journey towards healing and growth",
        quote: "\"Every healing journey is unique. Together, we'll create a personalized path to your wellbeing.\"",
        cards: &[
            FeatureCard {
                title: "Anxiety",
                description: "Evidence-based techniques to manage panic, chronic worry, and anxious thoughts with practical daily tools.",
                features: &["Panic Management", "Worry Control", "Mindfulness"],
            },
            FeatureCard {
                title: "Depression",
                description: "Comprehensive strategies including behavioral activation, mood tracking, and cognitive restructuring.",
                features: &["Mood Tracking", "Activity Planning", "Cognitive Work"],
            },
            FeatureCard {
                title: "Trauma",
                description: "Gentle, trauma-informed approaches for healing and post-traumatic growth in a safe environment.",
                features: &["Trauma-Informed Care", "Safety Building", "Healing Process"],
            },
            FeatureCard {
                title: "Relationship Issues",
                description: "Develop communication skills, establish healthy boundaries, and build meaningful connections.",
                features: &["Communication Skills", "Boundary Setting", "Connection Building"],
            },
        ],
    },
    qualifications: QualificationsStrings {
        title: "Professional Qualifications",
        subtitle: "Trusted expertise backed by extensive education, certifications, and clinical experience",
        badge: "Verified & Licensed Professional",
        cards: &[
            QualificationCard {
                title: "MSc Clinical Psychology",
                subtitle: "University of California, Los Angeles",
                description: "Specialized in Cognitive Behavioral Therapy and Trauma-Informed Care",
                year: "2014",
            },
            QualificationCard {
                title: "Licensed Psychologist",
                subtitle: "License #PSY-28745",
                description: "California Board of Psychology • Active through 2026",
                year: "2016",
            },
            QualificationCard {
                title: "Certified CBT Practitioner",
                subtitle: "Academy of Cognitive Therapy",
                description: "Advanced certification in evidence-based CBT interventions",
                year: "2018",
            },
            QualificationCard {
                title: "Clinical Experience",
                subtitle: "10+ Years Practice",
                description: "Specializing in anxiety, depression, and trauma recovery",
                year: "Present",
            },
        ],
    },
    contact: ContactStrings {
        title: "Get In Touch",
        subtitle: "Ready to begin your journey? Reach out and we'll respond promptly.",
        steps: [
            StepStrings { title: "Your Name", subtitle: "Let's start with your name" },
            StepStrings { title: "Your Email", subtitle: "How can we reach you?" },
            StepStrings { title: "Your Message", subtitle: "Tell us how we can help" },
            StepStrings { title: "Review & Send", subtitle: "Please review your information" },
        ],
        name_placeholder: "Your full name",
        email_placeholder: "Your email address",
        message_placeholder: "Tell me about what you're looking for help with...",
        review_name: "NAME",
        review_email: "EMAIL",
        review_message: "MESSAGE",
        back: "Back",
        next: "Continue",
        send_button: "Send Message",
        sending: "Sending...",
        success_message: "Message sent successfully! We'll get back to you soon.",
        error_message: "Failed to send message. Please try again.",
        response_time: "Typically respond within 24 hours",
        errors: ContactErrorStrings {
            name_required: "Name is required",
            name_too_short: "Name must be at least 2 characters",
            email_required: "Email is required",
            email_invalid: "Please enter a valid email address",
            message_required: "Message is required",
            message_too_short: "Message must be at least 10 characters",
        },
    },
    blog_showcase: BlogShowcaseStrings {
        title: "Insights & Stories",
        subtitle: "Explore professional insights and personal growth stories from our therapy blog",
        read_more: "Read more",
        view_all: "View All Articles",
        min_read: "min read",
        coming_soon: "Coming Soon",
        coming_soon_desc: "New insights and stories are on their way",
    },
    blog: BlogStrings {
        title: "Insights & Stories",
        subtitle: "Professional perspectives on mental health, therapy and personal growth",
        load_failed_title: "Unable to Load Posts",
        load_failed_text: "We could not reach the blog right now.",
        retry: "Try again",
        empty_title: "No Posts Yet",
        empty_text: "New articles are on their way. Check back soon.",
        professional_insight: "Professional insight",
        article_singular: "article",
        article_plural: "articles",
    },
    resources: ResourcesStrings {
        title: "Helpful Resources",
        subtitle: "Curated tools, articles and links for your emotional wellbeing",
        load_failed_title: "Connection Issue",
        load_failed_text: "We could not load the resources right now.",
        retry: "Try again",
        empty_title: "Resources Coming Soon",
        empty_text: "New resources are being curated for you.",
        check_back: "Check back soon",
        visit: "Visit resource",
        added: "Added",
    },
    login: LoginStrings {
        title: "Admin Access",
        subtitle: "Sign in to manage your practice content",
        email_label: "Email",
        password_label: "Password",
        email_placeholder: "admin@example.com",
        password_placeholder: "Your password",
        submit: "Access Dashboard",
        authenticating: "Authenticating...",
        invalid_credentials: "Invalid email or password",
        secure_note: "Secure admin access • Encrypted connection",
    },
    admin: AdminStrings {
        loading: "Loading Admin Panel...",
        dashboard: "Admin Dashboard",
        subtitle: "Manage your therapy practice content and resources",
        create_tab: "Create Content",
        manage_tab: "Manage Content",
        create_blog_title: "Create Blog Post",
        blog_title_placeholder: "Blog post title...",
        blog_content_placeholder: "Write your blog content here...",
        publishing: "Publishing...",
        publish_button: "Publish Blog Post",
        add_resource_title: "Add Resource",
        resource_title_placeholder: "Resource title...",
        resource_url_placeholder: "https://example.com/resource",
        resource_desc_placeholder: "Resource description...",
        saving: "Saving...",
        save_button: "Save Resource",
        manage_blogs_title: "Manage Blog Posts",
        no_blogs_message: "No blog posts yet. Create your first blog post!",
        by: "By",
        delete_button: "Delete",
        manage_resources_title: "Manage Resources",
        no_resources_message: "No resources yet. Add your first resource!",
        logged_in_as: "Logged in as:",
        logout: "Log out",
        confirm_yes: "Yes, delete",
        confirm_no: "Cancel",
        notifications: AdminNotificationStrings {
            failed_load_blogs: "Failed to load blogs",
            failed_load_resources: "Failed to load resources",
            fill_all_fields: "Please fill in all fields",
            invalid_url: "Please enter a valid http(s) link",
            blog_published: "Blog post published successfully!",
            blog_publish_failed: "Failed to publish blog. Please try again.",
            resource_saved: "Resource saved successfully!",
            resource_save_failed: "Failed to save resource. Please try again.",
            confirm_delete_blog: "Are you sure you want to delete this blog post?",
            blog_deleted: "Blog post deleted successfully!",
            blog_delete_failed: "Failed to delete blog post.",
            confirm_delete_resource: "Are you sure you want to delete this resource?",
            resource_deleted: "Resource deleted successfully!",
            resource_delete_failed: "Failed to delete resource.",
        },
    },
    footer: FooterStrings {
        professional_note: "Professional Therapy Services",
        services: "Licensed Psychologist • Confidential Sessions • Evidence-Based Approaches • Personalized Care",
        crafted_with: "Crafted with",
        for_wellbeing: "for your wellbeing",
        all_rights: "All rights reserved",
        licensed_psychologist: "Licensed Psychologist",
        confidential_secure: "Confidential & Secure",
    },
    dates: DateStrings {
        today: "Today",
        yesterday: "Yesterday",
        days_ago: Affix { prefix: "", suffix: " days ago" },
        weeks_ago: Affix { prefix: "", suffix: " weeks ago" },
        months: [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
    },
    seo: SeoStrings {
        site_name: "Lorena Cebrián García - Psychologist in Madrid",
        locale: "en_US",
        home: PageMeta {
            title: "Lorena Cebrián García - Clinical Psychologist in Madrid | Cognitive Behavioral Therapy",
            description: "Licensed clinical psychologist in Madrid specializing in Cognitive Behavioral Therapy (CBT), anxiety, depression, trauma, and couples therapy. Over 10 years of experience. Free 15-minute consultation.",
            keywords: "psychologist Madrid, clinical psychologist Madrid, cognitive behavioral therapy Madrid, CBT Madrid, anxiety therapist Madrid, depression therapist Madrid, trauma therapy Madrid, couples therapy Madrid",
        },
        blog: PageMeta {
            title: "Psychology Blog - Lorena Cebrián García | Mental Health Articles",
            description: "Read professional articles about psychology, mental health, cognitive behavioral therapy, anxiety, depression, and emotional wellbeing. Practical advice from a clinical psychologist in Madrid.",
            keywords: "psychology blog, mental health articles, psychological advice, cognitive behavioral therapy, anxiety tips, depression help, emotional wellbeing, psychology Madrid",
        },
        resources: PageMeta {
            title: "Psychology Resources - Lorena Cebrián García | Useful Tools and Links",
            description: "Recommended psychology and mental health resources. Tools, articles, and useful links curated by a clinical psychologist in Madrid for your emotional wellbeing.",
            keywords: "psychology resources, mental health tools, psychology links, therapy resources, psychological help, emotional wellbeing resources",
        },
        login: PageMeta {
            title: "Admin Access - Lorena Cebrián García",
            description: "Sign-in for the practice administrator.",
            keywords: "",
        },
        admin: PageMeta {
            title: "Admin Dashboard - Lorena Cebrián García",
            description: "Manage blog posts and resources.",
            keywords: "",
        },
    },
};

pub static SPANISH: Translations = Translations {
    navbar: NavbarStrings {
        home: "Inicio",
        about: "Acerca de",
        services: "Servicios",
        contact: "Contacto",
        more: "Más",
        blog: "Blog",
        resources: "Recursos",
        admin: "Admin",
        admin_portal: "Portal de Admin",
        switch_language: "Cambiar a Inglés",
    },
    about: AboutStrings {
        licensed: "Licenciada",
        experience: "Espacio Seguro",
        name: "Dra. Lorena",
        title: "Psicóloga Clínica Licenciada",
        description: "Especializada en Terapia Cognitivo Conductual, prácticas de mindfulness y atención informada en trauma. Proporciono terapia basada en evidencia adaptada a tu viaje único hacia la sanación y el crecimiento.",
        cbt_highlight: "Terapia Cognitivo Conductual",
        approaches: &[
            Approach { title: "Basado en Evidencia", desc: "Métodos científicamente probados" },
            Approach { title: "Personalizado", desc: "Adaptado a tus necesidades" },
            Approach { title: "Confidencial", desc: "Espacio seguro y privado" },
            Approach { title: "Sostenible", desc: "Sanación a largo plazo" },
        ],
        areas_title: "Áreas de Enfoque",
        specialties: &[
            "Trastornos de Ansiedad",
            "Depresión",
            "Recuperación de Trauma",
            "Transiciones de Vida",
            "Mindfulness",
            "Problemas de Relación",
            "Autoestima",
            "Manejo del Estrés",
        ],
        cta: "Comienza Tu Viaje",
        cta_subtext: "Consulta gratuita de 15 minutos • Horarios flexibles",
    },
    benefits: BenefitsStrings {
        badge: "Resultados Comprobados",
        title: "Transforma Tu Salud Mental",
        subtitle: "Experimenta un cambio significativo a través de enfoques terapéuticos basados en evidencia, adaptados a tus necesidades y objetivos únicos",
        cta: "Comienza Tu Viaje Hoy",
        cta_subtext: "Da el primer paso hacia un cambio positivo",
        cards: &[
            FeatureCard {
                title: "Reduce la Ansiedad",
                description: "Aprende habilidades prácticas y técnicas basadas en evidencia para manejar eficazmente la preocupación, los ataques de pánico y los pensamientos ansiosos en la vida diaria.",
                features: &["Técnicas de TCC", "Prácticas de Mindfulness", "Ejercicios de Respiración"],
            },
            FeatureCard {
                title: "Mejora el Estado de Ánimo",
                description: "Desarrolla estrategias de activación conductual y herramientas cognitivas para mejorar el ánimo, aumentar la motivación y combatir los síntomas depresivos.",
                features: &["Activación Conductual", "Seguimiento del Estado de Ánimo", "Psicología Positiva"],
            },
            FeatureCard {
                title: "Mejores Relaciones",
                description: "Mejora las habilidades de comunicación, establece límites saludables y construye conexiones más significativas con los demás.",
                features: &["Habilidades de Comunicación", "Establecimiento de Límites", "Resolución de Conflictos"],
            },
            FeatureCard {
                title: "Recuperación del Trauma",
                description: "Experimenta atención de trauma pausada y de apoyo con enfoques basados en evidencia para la sanación y el crecimiento postraumático.",
                features: &["Atención Informada en Trauma", "Técnicas EMDR", "Planificación de Seguridad"],
            },
        ],
    },
    services: ServicesStrings {
        badge: "Precios Transparentes",
        title: "Servicios e Inversión",
        subtitle: "Invierte en tu bienestar con precios transparentes y accesibles para apoyo terapéutico profesional",
        most_popular: "Más Popular",
        per_session: "por sesión",
        book_now: "Reservar Ahora",
        visit_referral: "Visitar Referencia",
        cards: &[
            ServiceCard {
                title: "Terapia Individual",
                subtitle: None,
                description: "Sesiones personalizadas de 50 minutos enfocadas en tus necesidades y objetivos únicos",
                price: Some("50 €"),
                duration: Some("sesión de 50 min"),
                features: &["Enfoque Personalizado", "Espacio Confidencial", "Sesiones Semanales"],
            },
            ServiceCard {
                title: "Terapia de Pareja",
                subtitle: None,
                description: "Sesiones de 50 minutos diseñadas para mejorar la comunicación y fortalecer las relaciones",
                price: Some("50 €"),
                duration: Some("sesión de 50 min"),
                features: &["Habilidades de Comunicación", "Resolución de Conflictos", "Crecimiento de la Relación"],
            },
            ServiceCard {
                title: "Referencia Especializada",
                subtitle: Some("Dra. María Martínez"),
                description: "Para EMDR enfocado en trauma especializado, TEPT complejo e intervenciones terapéuticas avanzadas",
                price: None,
                duration: None,
                features: &["Terapia EMDR", "Especialista en Trauma", "Intervenciones Avanzadas"],
            },
        ],
        insurance_note: "Seguro y Pago:",
        insurance_text: "Se aceptan muchos planes de seguro. Escala móvil disponible para quienes lo necesiten. Consulta gratuita de 15 minutos para asegurar que somos la opción adecuada.",
    },
    help_cards: HelpCardsStrings {
        badge: "Apoyo Especializado",
        title: "Cómo Lorena Puede Ayudar",
        subtitle: "Apoyo terapéutico experto adaptado a tu viaje único hacia la sanación y el crecimiento",
        quote: "\"Cada viaje de sanación es único. Juntos, crearemos un camino personalizado hacia tu bienestar.\"",
        cards: &[
            FeatureCard {
                title: "Ansiedad",
                description: "Técnicas basadas en evidencia para manejar el pánico, la preocupación crónica y los pensamientos ansiosos con herramientas prácticas diarias.",
                features: &["Manejo del Pánico", "Control de Preocupaciones", "Mindfulness"],
            },
            FeatureCard {
                title: "Depresión",
                description: "Estrategias integrales que incluyen activación conductual, seguimiento del estado de ánimo y reestructuración cognitiva.",
                features: &["Seguimiento del Ánimo", "Planificación de Actividades", "Trabajo Cognitivo"],
            },
            FeatureCard {
                title: "Trauma",
                description: "Enfoques suaves e informados en trauma para la sanación y el crecimiento postraumático en un entorno seguro.",
                features: &["Atención Informada en Trauma", "Construcción de Seguridad", "Proceso de Sanación"],
            },
            FeatureCard {
                title: "Problemas de Relación",
                description: "Desarrolla habilidades de comunicación, establece límites saludables y construye conexiones significativas.",
                features: &["Habilidades de Comunicación", "Establecimiento de Límites", "Construcción de Conexiones"],
            },
        ],
    },
    qualifications: QualificationsStrings {
        title: "Cualificaciones Profesionales",
        subtitle: "Experiencia confiable respaldada por educación extensa, certificaciones y experiencia clínica",
        badge: "Profesional Verificada y Licenciada",
        cards: &[
            QualificationCard {
                title: "Maestría en Psicología Clínica",
                subtitle: "Universidad de California, Los Ángeles",
                description: "Especializada en Terapia Cognitivo Conductual y Atención Informada en Trauma",
                year: "2014",
            },
            QualificationCard {
                title: "Psicóloga Licenciada",
                subtitle: "Licencia #PSY-28745",
                description: "Junta de Psicología de California • Activa hasta 2026",
                year: "2016",
            },
            QualificationCard {
                title: "Practicante Certificada de TCC",
                subtitle: "Academia de Terapia Cognitiva",
                description: "Certificación avanzada en intervenciones de TCC basadas en evidencia",
                year: "2018",
            },
            QualificationCard {
                title: "Experiencia Clínica",
                subtitle: "Más de 10 Años de Práctica",
                description: "Especializada en ansiedad, depresión y recuperación de trauma",
                year: "Presente",
            },
        ],
    },
    contact: ContactStrings {
        title: "Ponte en Contacto",
        subtitle: "¿Listo para comenzar tu viaje? Comunícate y te responderemos pronto.",
        steps: [
            StepStrings { title: "Tu Nombre", subtitle: "Comencemos con tu nombre" },
            StepStrings { title: "Tu Correo", subtitle: "¿Cómo podemos contactarte?" },
            StepStrings { title: "Tu Mensaje", subtitle: "Cuéntanos cómo podemos ayudarte" },
            StepStrings { title: "Revisar y Enviar", subtitle: "Por favor revisa tu información" },
        ],
        name_placeholder: "Tu nombre completo",
        email_placeholder: "Tu dirección de correo electrónico",
        message_placeholder: "Cuéntame sobre lo que buscas ayuda...",
        review_name: "NOMBRE",
        review_email: "CORREO",
        review_message: "MENSAJE",
        back: "Atrás",
        next: "Continuar",
        send_button: "Enviar Mensaje",
        sending: "Enviando...",
        success_message: "¡Mensaje enviado con éxito! Te responderemos pronto.",
        error_message: "Error al enviar el mensaje. Por favor, inténtalo de nuevo.",
        response_time: "Normalmente respondemos en 24 horas",
        errors: ContactErrorStrings {
            name_required: "El nombre es requerido",
            name_too_short: "El nombre debe tener al menos 2 caracteres",
            email_required: "El correo es requerido",
            email_invalid: "Por favor ingresa un correo válido",
            message_required: "El mensaje es requerido",
            message_too_short: "El mensaje debe tener al menos 10 caracteres",
        },
    },
    blog_showcase: BlogShowcaseStrings {
        title: "Perspectivas e Historias",
        subtitle: "Explora perspectivas profesionales e historias de crecimiento personal de nuestro blog de terapia",
        read_more: "Leer más",
        view_all: "Ver Todos los Artículos",
        min_read: "min de lectura",
        coming_soon: "Próximamente",
        coming_soon_desc: "Nuevas perspectivas e historias están en camino",
    },
    blog: BlogStrings {
        title: "Perspectivas e Historias",
        subtitle: "Perspectivas profesionales sobre salud mental, terapia y crecimiento personal",
        load_failed_title: "No se Pudieron Cargar las Publicaciones",
        load_failed_text: "No pudimos acceder al blog en este momento.",
        retry: "Reintentar",
        empty_title: "Aún no hay Publicaciones",
        empty_text: "Nuevos artículos están en camino. Vuelve pronto.",
        professional_insight: "Perspectiva profesional",
        article_singular: "artículo",
        article_plural: "artículos",
    },
    resources: ResourcesStrings {
        title: "Recursos Útiles",
        subtitle: "Herramientas, artículos y enlaces seleccionados para tu bienestar emocional",
        load_failed_title: "Problema de Conexión",
        load_failed_text: "No pudimos cargar los recursos en este momento.",
        retry: "Reintentar",
        empty_title: "Recursos Próximamente",
        empty_text: "Estamos seleccionando nuevos recursos para ti.",
        check_back: "Vuelve pronto",
        visit: "Visitar recurso",
        added: "Añadido",
    },
    login: LoginStrings {
        title: "Acceso de Administración",
        subtitle: "Inicia sesión para administrar el contenido de tu práctica",
        email_label: "Correo",
        password_label: "Contraseña",
        email_placeholder: "admin@ejemplo.com",
        password_placeholder: "Tu contraseña",
        submit: "Acceder al Panel",
        authenticating: "Autenticando...",
        invalid_credentials: "Correo o contraseña incorrectos",
        secure_note: "Acceso seguro de administración • Conexión cifrada",
    },
    admin: AdminStrings {
        loading: "Cargando Panel de Administración...",
        dashboard: "Panel de Administración",
        subtitle: "Administra el contenido y recursos de tu práctica terapéutica",
        create_tab: "Crear Contenido",
        manage_tab: "Administrar Contenido",
        create_blog_title: "Crear Publicación de Blog",
        blog_title_placeholder: "Título de la publicación del blog...",
        blog_content_placeholder: "Escribe el contenido de tu blog aquí...",
        publishing: "Publicando...",
        publish_button: "Publicar Entrada de Blog",
        add_resource_title: "Agregar Recurso",
        resource_title_placeholder: "Título del recurso...",
        resource_url_placeholder: "https://ejemplo.com/recurso",
        resource_desc_placeholder: "Descripción del recurso...",
        saving: "Guardando...",
        save_button: "Guardar Recurso",
        manage_blogs_title: "Administrar Publicaciones de Blog",
        no_blogs_message: "¡Aún no hay publicaciones de blog. Crea tu primera publicación!",
        by: "Por",
        delete_button: "Eliminar",
        manage_resources_title: "Administrar Recursos",
        no_resources_message: "¡Aún no hay recursos. Agrega tu primer recurso!",
        logged_in_as: "Sesión iniciada como:",
        logout: "Cerrar sesión",
        confirm_yes: "Sí, eliminar",
        confirm_no: "Cancelar",
        notifications: AdminNotificationStrings {
            failed_load_blogs: "Error al cargar blogs",
            failed_load_resources: "Error al cargar recursos",
            fill_all_fields: "Por favor completa todos los campos",
            invalid_url: "Introduce un enlace http(s) válido",
            blog_published: "¡Publicación de blog publicada con éxito!",
            blog_publish_failed: "Error al publicar el blog. Por favor, inténtalo de nuevo.",
            resource_saved: "¡Recurso guardado con éxito!",
            resource_save_failed: "Error al guardar el recurso. Por favor, inténtalo de nuevo.",
            confirm_delete_blog: "¿Estás seguro de que quieres eliminar esta publicación de blog?",
            blog_deleted: "¡Publicación de blog eliminada con éxito!",
            blog_delete_failed: "Error al eliminar la publicación del blog.",
            confirm_delete_resource: "¿Estás seguro de que quieres eliminar este recurso?",
            resource_deleted: "¡Recurso eliminado con éxito!",
            resource_delete_failed: "Error al eliminar el recurso.",
        },
    },
    footer: FooterStrings {
        professional_note: "Servicios de Terapia Profesional",
        services: "Psicóloga Licenciada • Sesiones Confidenciales • Enfoques Basados en Evidencia • Atención Personalizada",
        crafted_with: "Creado con",
        for_wellbeing: "para tu bienestar",
        all_rights: "Todos los derechos reservados",
        licensed_psychologist: "Psicóloga Licenciada",
        confidential_secure: "Confidencial y Seguro",
    },
    dates: DateStrings {
        today: "Hoy",
        yesterday: "Ayer",
        days_ago: Affix { prefix: "Hace ", suffix: " días" },
        weeks_ago: Affix { prefix: "Hace ", suffix: " semanas" },
        months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
    },
    seo: SeoStrings {
        site_name: "Lorena Cebrián García - Psicóloga en Madrid",
        locale: "es_ES",
        home: PageMeta {
            title: "Lorena Cebrián García - Psicóloga Clínica en Madrid | Terapia Cognitivo Conductual",
            description: "Psicóloga clínica licenciada en Madrid especializada en Terapia Cognitivo Conductual (TCC), ansiedad, depresión, trauma y terapia de pareja. Más de 10 años de experiencia. Consulta gratuita de 15 minutos.",
            keywords: "psicóloga Madrid, psicóloga clínica Madrid, terapia cognitivo conductual Madrid, TCC Madrid, psicólogo ansiedad Madrid, psicólogo depresión Madrid, terapia trauma Madrid, terapia pareja Madrid",
        },
        blog: PageMeta {
            title: "Blog de Psicología - Lorena Cebrián García | Artículos sobre Salud Mental",
            description: "Lee artículos profesionales sobre psicología, salud mental, terapia cognitivo conductual, ansiedad, depresión y bienestar emocional. Consejos prácticos de una psicóloga clínica en Madrid.",
            keywords: "blog psicología, artículos salud mental, consejos psicológicos, terapia cognitivo conductual, ansiedad consejos, depresión ayuda, bienestar emocional, psicología Madrid",
        },
        resources: PageMeta {
            title: "Recursos de Psicología - Lorena Cebrián García | Herramientas y Enlaces Útiles",
            description: "Recursos recomendados de psicología y salud mental. Herramientas, artículos y enlaces útiles seleccionados por una psicóloga clínica en Madrid para tu bienestar emocional.",
            keywords: "recursos psicología, herramientas salud mental, enlaces psicología, recursos terapia, ayuda psicológica, bienestar emocional recursos",
        },
        login: PageMeta {
            title: "Acceso de Administración - Lorena Cebrián García",
            description: "Acceso para la administración de la práctica.",
            keywords: "",
        },
        admin: PageMeta {
            title: "Panel de Administración - Lorena Cebrián García",
            description: "Administra publicaciones y recursos.",
            keywords: "",
        },
    },
};
