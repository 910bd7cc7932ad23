//! アプリに同梱された固定エントリ
//!
//! バックエンドが空でも落ちていても一覧に出す基本データ。タイトルは各コレクション内で一意。

use super::collection::Collection;
use super::entry::{Entry, EntryDetails, Origin, ProjectDetails, ServiceDetails};

struct SeedProject {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    completion: &'static str,
    technologies: &'static [&'static str],
    outcome: &'static str,
    demo: &'static str,
    image: &'static str,
}

struct SeedService {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    features: &'static [&'static str],
    pricing: &'static str,
}

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        id: "1",
        title: "Pixar Movie Gallery",
        description: "An interactive movie gallery showcasing Pixar films with filtering and search capabilities. \
The gallery loads movie data from a JSON file and displays posters, titles, directors and release years. \
Movies can be filtered by year or director, sorted by release date and searched by title.",
        completion: "2024-01-15T00:00:00.000Z",
        technologies: &["HTML", "CSS", "JavaScript", "JSON"],
        outcome: "Created a fully functional interactive gallery demonstrating DOM manipulation, JSON data handling, filtering, and search functionality.",
        demo: "/pixar-gallery.html",
        image: "/images/01_ts.jpg",
    },
    SeedProject {
        id: "2",
        title: "Word Guessing Game",
        description: "An interactive word guessing game featuring two game modes. \
In Classic Mode players have 6 lives to guess a randomly selected word; in Time Mode they have 30 seconds. \
Letters can be entered with on-screen or physical keyboard input, with win/lose detection and visual feedback.",
        completion: "2024-02-20T00:00:00.000Z",
        technologies: &["HTML", "CSS", "JavaScript"],
        outcome: "Created an engaging interactive game demonstrating event handling, DOM manipulation, timer functionality, and game logic implementation.",
        demo: "/word-game.html",
        image: "/images/word-game.jpg",
    },
    SeedProject {
        id: "3",
        title: "Pokédex Application",
        description: "An interactive Pokédex web application that allows users to search for Pokémon by name or ID using the PokeAPI. \
It shows types, abilities, height, weight and base stats in a modal view, \
and keeps up to 6 favorite Pokémon in local storage.",
        completion: "2024-03-15T00:00:00.000Z",
        technologies: &["HTML", "CSS", "JavaScript", "PokeAPI", "LocalStorage"],
        outcome: "Created a fully functional Pokédex application demonstrating API integration, asynchronous JavaScript, DOM manipulation, and client-side data persistence using localStorage.",
        demo: "/pokedex.html",
        image: "/pokedex-img/logo.png",
    },
];

const SERVICES: &[SeedService] = &[
    SeedService {
        id: "1",
        title: "Web Development",
        description: "Custom website development using modern technologies like React, Node.js and JavaScript. From simple landing pages to complex web applications.",
        icon: "fas fa-code",
        features: &[
            "Responsive Design",
            "Custom Web Applications",
            "E-commerce Solutions",
            "CMS Integration",
            "API Development",
            "Performance Optimization",
        ],
        pricing: "Starting at $100",
    },
    SeedService {
        id: "2",
        title: "Full Stack Development",
        description: "Complete end-to-end development solutions including frontend, backend, database design, and deployment.",
        icon: "fas fa-server",
        features: &[
            "Frontend Development",
            "Backend Development",
            "Database Design",
            "Cloud Deployment",
            "DevOps Setup",
            "Technical Consulting",
        ],
        pricing: "Starting at $300",
    },
    SeedService {
        id: "3",
        title: "Technical Consulting",
        description: "Technical advice and guidance for technology decisions in web development strategy.",
        icon: "fas fa-lightbulb",
        features: &[
            "Technology Assessment",
            "Code Reviews",
            "Performance Audits",
            "Security Analysis",
        ],
        pricing: "$50/hour",
    },
];

/// コレクションの固定エントリを返す（origin = Seed）
pub fn seed_entries(collection: Collection) -> Vec<Entry> {
    match collection {
        Collection::Projects => PROJECTS
            .iter()
            .map(|p| {
                Entry::project(p.id, p.title, p.description, Origin::Seed)
                    .with_tags(p.technologies.iter().copied())
                    .with_image(p.image)
                    .with_details(EntryDetails::Project(ProjectDetails {
                        github: Some("#".to_string()),
                        demo: Some(p.demo.to_string()),
                        role: Some("Web Developer".to_string()),
                        outcome: Some(p.outcome.to_string()),
                        category: Some("web".to_string()),
                        completion: Some(p.completion.to_string()),
                    }))
            })
            .collect(),
        Collection::Services => SERVICES
            .iter()
            .map(|s| {
                Entry::service(s.id, s.title, s.description, Origin::Seed)
                    .with_tags(s.features.iter().copied())
                    .with_details(EntryDetails::Service(ServiceDetails {
                        pricing: Some(s.pricing.to_string()),
                        icon: Some(s.icon.to_string()),
                    }))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_titles_are_unique_and_complete() {
        for collection in [Collection::Projects, Collection::Services] {
            let seeds = seed_entries(collection);
            assert_eq!(seeds.len(), 3);
            let titles: BTreeSet<_> = seeds.iter().map(|e| e.title.as_str()).collect();
            assert_eq!(titles.len(), seeds.len());
            assert!(seeds.iter().all(|e| e.is_complete() && e.origin == Origin::Seed));
            assert!(seeds.iter().all(|e| !collection.denylist().contains(&e.title)));
        }
    }

    #[test]
    fn test_seed_service_details() {
        let services = seed_entries(Collection::Services);
        let consulting = &services[2];
        assert_eq!(consulting.title, "Technical Consulting");
        let s = consulting.as_service().unwrap();
        assert_eq!(s.pricing.as_deref(), Some("$50/hour"));
        assert_eq!(s.icon.as_deref(), Some("fas fa-lightbulb"));
        assert_eq!(consulting.image, None);
    }
}
