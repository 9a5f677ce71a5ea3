use chrono::NaiveDate;

use crate::models::{BlogPost, Faq, Feature, PricingPlan, ServiceOffering, Stat, TeamMember, Testimonial};

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "🏢",
            title: "Project Planning",
            description: "Advanced project planning tools with Gantt charts, milestones, and resource allocation.",
        },
        Feature {
            icon: "📊",
            title: "Budget Tracking",
            description: "Real-time budget monitoring with cost forecasting and expense categorization.",
        },
        Feature {
            icon: "👥",
            title: "Team Collaboration",
            description: "Seamless collaboration tools for architects, contractors, and project managers.",
        },
        Feature {
            icon: "🛡",
            title: "Compliance Management",
            description: "Built-in compliance tracking for safety regulations and building codes.",
        },
        Feature {
            icon: "⚡",
            title: "Automation",
            description: "Automated workflows for approvals, notifications, and progress updates.",
        },
    ]
}

pub fn landing_stats() -> Vec<Stat> {
    vec![
        Stat { icon: "", number: "500+", label: "Projects Completed" },
        Stat { icon: "", number: "₹100+ Cr", label: "Value Managed" },
        Stat { icon: "", number: "98%", label: "Customer Satisfaction" },
        Stat { icon: "", number: "50+", label: "Cities Covered" },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Rajesh Kumar",
            role: "Project Manager",
            company: "Mumbai Construction Ltd.",
            content: "Construo has transformed how we manage our projects. We've reduced delays by 40% and improved our profit margins significantly.",
            avatar: "/static/placeholder.svg",
        },
        Testimonial {
            name: "Priya Sharma",
            role: "Architect",
            company: "Design Studio Pro",
            content: "The collaboration features are incredible. Our entire team stays in sync, and clients love the transparency.",
            avatar: "/static/placeholder.svg",
        },
        Testimonial {
            name: "Amit Patel",
            role: "Contractor",
            company: "Patel Builders",
            content: "Budget tracking and resource management have never been this easy. Highly recommended for any construction business.",
            avatar: "/static/placeholder.svg",
        },
    ]
}

pub fn achievements() -> Vec<Stat> {
    vec![
        Stat { icon: "👥", number: "500+", label: "Happy Clients" },
        Stat { icon: "🏢", number: "1000+", label: "Projects Completed" },
        Stat { icon: "🏆", number: "₹100+ Cr", label: "Value Managed" },
        Stat { icon: "🎯", number: "98%", label: "Success Rate" },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Rajesh Kumar",
            role: "CEO & Founder",
            image: "/static/placeholder.svg",
            bio: "20+ years in construction management",
        },
        TeamMember {
            name: "Priya Sharma",
            role: "CTO",
            image: "/static/placeholder.svg",
            bio: "Tech leader with expertise in SaaS platforms",
        },
        TeamMember {
            name: "Amit Patel",
            role: "Head of Operations",
            image: "/static/placeholder.svg",
            bio: "Construction industry veteran",
        },
    ]
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Basic",
            icon: "🏗",
            description: "Perfect for small construction teams",
            monthly_price: 199,
            yearly_price: 1999,
            features: &[
                "Up to 5 projects",
                "Basic project planning",
                "Budget tracking",
                "Team collaboration (5 users)",
                "Mobile app access",
                "Email support",
            ],
            popular: false,
        },
        PricingPlan {
            name: "Pro",
            icon: "⚡",
            description: "For growing construction businesses",
            monthly_price: 299,
            yearly_price: 2999,
            features: &[
                "Up to 25 projects",
                "Advanced project planning",
                "Real-time budget tracking",
                "Team collaboration (25 users)",
                "Mobile app access",
                "Priority support",
                "Custom reports",
                "Integration with accounting tools",
                "Progress tracking with photos",
            ],
            popular: true,
        },
        PricingPlan {
            name: "Enterprise",
            icon: "⭐",
            description: "For large construction enterprises",
            monthly_price: 1999,
            yearly_price: 19990,
            features: &[
                "Unlimited projects",
                "Enterprise project planning",
                "Advanced analytics & reporting",
                "Unlimited users",
                "Mobile app access",
                "24/7 dedicated support",
                "Custom integrations",
                "Advanced security features",
                "White-label options",
                "API access",
                "Custom training sessions",
            ],
            popular: false,
        },
    ]
}

pub fn pricing_faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "Can I change my plan anytime?",
            answer: "Yes, you can upgrade or downgrade your plan at any time. Changes will be reflected in your next billing cycle.",
        },
        Faq {
            question: "Is there a free trial available?",
            answer: "We offer a 14-day free trial for all plans. No credit card required to get started.",
        },
        Faq {
            question: "What payment methods do you accept?",
            answer: "We accept all major credit cards, debit cards, UPI, and net banking through our secure payment partner Razorpay.",
        },
        Faq {
            question: "Do you offer refunds?",
            answer: "Yes, we offer a 30-day money-back guarantee if you're not satisfied with our service.",
        },
    ]
}

fn post_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            slug: "sustainable-construction",
            title: "The Future of Sustainable Construction",
            date: post_date(2023, 10, 26),
            author: "Construo Team",
            excerpt: "Explore innovative practices and materials shaping environmentally-friendly building.",
            image: "/static/placeholder.svg",
        },
        BlogPost {
            id: 2,
            slug: "project-management-tools",
            title: "5 Essential Project Management Tools for Contractors",
            date: post_date(2023, 10, 20),
            author: "Construo Team",
            excerpt: "Discover the top tools that can streamline your construction projects from start to finish.",
            image: "/static/placeholder.svg",
        },
        BlogPost {
            id: 3,
            slug: "construction-regulations",
            title: "Navigating Construction Regulations: A Comprehensive Guide",
            date: post_date(2023, 10, 15),
            author: "Construo Team",
            excerpt: "Understand the complex world of building codes and permits to ensure compliance.",
            image: "/static/placeholder.svg",
        },
        BlogPost {
            id: 4,
            slug: "job-site-efficiency",
            title: "Maximizing Efficiency on the Job Site",
            date: post_date(2023, 10, 10),
            author: "Construo Team",
            excerpt: "Tips and strategies to optimize workflows and boost productivity in your projects.",
            image: "/static/placeholder.svg",
        },
    ]
}

pub fn find_blog_post(slug: &str) -> Option<BlogPost> {
    blog_posts().into_iter().find(|p| p.slug == slug)
}

pub fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering { id: 1, name: "Interior Design", icon: "🛋", description: "Design planning, 2D/3D layouts", image: "/static/placeholder.svg" },
        ServiceOffering { id: 2, name: "Civil Construction", icon: "🧱", description: "Complete build and site execution", image: "/static/placeholder.svg" },
        ServiceOffering { id: 3, name: "Electrical Work", icon: "💡", description: "Wiring, lighting, automation", image: "/static/placeholder.svg" },
        ServiceOffering { id: 4, name: "Plumbing", icon: "🚿", description: "Bathroom, kitchen, drainage", image: "/static/placeholder.svg" },
        ServiceOffering { id: 5, name: "Renovation & Remodeling", icon: "🧰", description: "Interior revamp, extension plans", image: "/static/placeholder.svg" },
        ServiceOffering { id: 6, name: "Site Planning & Layout", icon: "📐", description: "Land surveying, layout planning", image: "/static/placeholder.svg" },
        ServiceOffering { id: 7, name: "Landscaping", icon: "🌿", description: "Outdoor aesthetics, garden setup", image: "/static/placeholder.svg" },
        ServiceOffering { id: 8, name: "Post-Construction Cleanup", icon: "🧹", description: "Cleaning and finishing services", image: "/static/placeholder.svg" },
    ]
}
