//! Stories the catalog starts with.

use fabula_types::story::{Story, StoryStatus};

#[allow(clippy::too_many_arguments)]
fn story(
    id: &str,
    title: &str,
    description: &str,
    participants: &[&str],
    last_activity: &str,
    message_count: u64,
    status: StoryStatus,
    genre: &str,
    created_at: &str,
) -> Story {
    Story {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
        last_activity: last_activity.to_string(),
        message_count,
        status,
        genre: genre.to_string(),
        created_at: created_at.to_string(),
        session_id: format!("session_{id}"),
    }
}

/// The four demo stories: two active, one paused, one completed.
pub fn seed_stories() -> Vec<Story> {
    vec![
        story(
            "1",
            "A Floresta Encantada",
            "Uma aventura mágica através de uma floresta cheia de criaturas místicas e segredos antigos.",
            &["Você", "Ana", "Carlos"],
            "2 horas atrás",
            47,
            StoryStatus::Active,
            "Fantasia",
            "2025-01-15",
        ),
        story(
            "2",
            "Mistério na Estação Espacial",
            "Um thriller de ficção científica onde a tripulação precisa resolver um mistério antes que seja tarde demais.",
            &["Você", "Marina"],
            "1 dia atrás",
            23,
            StoryStatus::Paused,
            "Ficção Científica",
            "2025-01-10",
        ),
        story(
            "3",
            "O Último Cavaleiro",
            "Uma épica medieval sobre honra, coragem e a busca pelo Santo Graal.",
            &["Você"],
            "3 dias atrás",
            15,
            StoryStatus::Completed,
            "Medieval",
            "2025-01-05",
        ),
        story(
            "4",
            "Detetive em Neo-Tokyo",
            "Um noir cyberpunk nas ruas neon de uma metrópole futurista.",
            &["Você", "Alex", "Sam", "Jordan"],
            "5 horas atrás",
            89,
            StoryStatus::Active,
            "Cyberpunk",
            "2025-01-12",
        ),
    ]
}
