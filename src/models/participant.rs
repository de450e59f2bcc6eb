use serde::{Deserialize, Serialize};

/// A person who can be invited to a meeting. Identity is the numeric id;
/// two values with the same id are the same participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Participant {
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("Team Member")
    }
}

/// Whether `id` is in the selected set, by id equality.
pub fn is_selected(selected: &[Participant], id: i64) -> bool {
    selected.iter().any(|p| p.id == id)
}

/// Toggle `id` in the selected set: remove it when present, otherwise copy
/// the matching roster entry in. Ids absent from the roster are ignored.
pub fn toggle_participant(selected: &mut Vec<Participant>, roster: &[Participant], id: i64) {
    if let Some(pos) = selected.iter().position(|p| p.id == id) {
        selected.remove(pos);
    } else if let Some(person) = roster.iter().find(|p| p.id == id) {
        selected.push(person.clone());
    }
}

/// Case-insensitive substring search over participant names, for the
/// selection modal's search box.
pub fn filter_by_name<'a>(roster: &'a [Participant], query: &str) -> Vec<&'a Participant> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn selected_count_label(count: usize) -> String {
    let plural = if count != 1 { "s" } else { "" };
    format!("{count} participant{plural} selected")
}

/// The sample roster the app ships with.
pub fn demo_roster() -> Vec<Participant> {
    let person = |id, name: &str, avatar: &str, role: &str| Participant {
        id,
        name: name.to_string(),
        avatar: avatar.to_string(),
        role: Some(role.to_string()),
    };
    vec![
        person(1, "John Doe", "👨‍💼", "Project Manager"),
        person(2, "Jane Smith", "👩‍💼", "Team Lead"),
        person(3, "Mike Johnson", "👨‍💻", "Developer"),
        person(4, "Sarah Wilson", "👩‍🔬", "Designer"),
        person(5, "David Brown", "👨‍🎨", "Marketing"),
        person(6, "Lisa Davis", "👩‍💻", "QA Engineer"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_from_roster_then_removes() {
        let roster = demo_roster();
        let mut selected = Vec::new();
        toggle_participant(&mut selected, &roster, 3);
        assert!(is_selected(&selected, 3));
        assert_eq!(selected[0].name, "Mike Johnson");
        toggle_participant(&mut selected, &roster, 3);
        assert!(!is_selected(&selected, 3));
    }

    #[test]
    fn toggle_ignores_unknown_id() {
        let roster = demo_roster();
        let mut selected = Vec::new();
        toggle_participant(&mut selected, &roster, 42);
        assert!(selected.is_empty());
    }

    #[test]
    fn membership_is_by_id_not_identity() {
        let roster = demo_roster();
        let mut renamed = roster[0].clone();
        renamed.name = "Johnny".to_string();
        assert!(is_selected(&[renamed], 1));
    }

    #[test]
    fn search_is_case_insensitive() {
        let roster = demo_roster();
        let hits = filter_by_name(&roster, "jo");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Mike Johnson"]);
        assert_eq!(filter_by_name(&roster, "").len(), roster.len());
        assert!(filter_by_name(&roster, "zzz").is_empty());
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(selected_count_label(0), "0 participants selected");
        assert_eq!(selected_count_label(1), "1 participant selected");
        assert_eq!(selected_count_label(2), "2 participants selected");
    }

    #[test]
    fn missing_role_reads_team_member() {
        let p = Participant {
            id: 9,
            name: "Ana".to_string(),
            avatar: "🙂".to_string(),
            role: None,
        };
        assert_eq!(p.role_label(), "Team Member");
        assert_eq!(demo_roster()[1].role_label(), "Team Lead");
    }
}
