use listing::post::{Author, Category, Link, Post, PostContent};

fn author(name: &str, username: &str) -> Author {
    Author {
        name: name.to_string(),
        username: username.to_string(),
        avatar: Some("/placeholder.svg".to_string()),
    }
}

fn categories(names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .map(|name| Category {
            name: (*name).to_string(),
        })
        .collect()
}

/// Demo posts shown on the learning-hub feed before any real content exists.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            author: author("Sebastián Salazar", "sebastiánsalazar"),
            content: PostContent {
                text: "Check out this interactive particle effect! Click to create more particles that move around the screen. Ideal for visualising systems that multiply, like stars in space.".to_string(),
                links: Vec::new(),
            },
            categories: categories(&["Computer Science", "Interactive Visualization"]),
        },
        Post {
            id: "2".to_string(),
            author: author("María González", "mariagonzalez"),
            content: PostContent {
                text: "Acabo de encontrar este increíble recurso sobre matemáticas. ¡Es perfecto para estudiantes que quieren mejorar sus habilidades!".to_string(),
                links: vec![Link {
                    url: "https://example.com/math-resource".to_string(),
                    title: Some("Matemáticas Avanzadas para Estudiantes".to_string()),
                    description: Some(
                        "Una colección de problemas y soluciones para preparar exámenes".to_string(),
                    ),
                }],
            },
            categories: categories(&["Matemáticas", "Educación"]),
        },
        Post {
            id: "3".to_string(),
            author: author("Carlos Rodríguez", "carlosrodriguez"),
            content: PostContent {
                text: "He estado aprendiendo sobre inteligencia artificial y machine learning. Aquí hay una presentación sobre cómo funciona una red neuronal.".to_string(),
                links: Vec::new(),
            },
            categories: categories(&["Inteligencia Artificial", "Tecnología"]),
        },
    ]
}
