//! Self-help resources listed on the resources page.

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub minutes: u32,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "box-breathing",
        title: "Box breathing",
        summary: "A four-count breathing pattern to calm the nervous system.",
        minutes: 5,
    },
    Resource {
        id: "grounding-5-4-3-2-1",
        title: "5-4-3-2-1 grounding",
        summary: "Use your senses to come back to the present moment.",
        minutes: 5,
    },
    Resource {
        id: "sleep-hygiene",
        title: "Sleep hygiene basics",
        summary: "Small evening habits that make rest easier.",
        minutes: 10,
    },
    Resource {
        id: "thought-record",
        title: "Thought record worksheet",
        summary: "Write down a difficult thought and look at the evidence.",
        minutes: 15,
    },
    Resource {
        id: "safety-plan",
        title: "Personal safety plan",
        summary: "Prepare warning signs, coping steps and people to contact.",
        minutes: 20,
    },
];

pub fn find_resource(id: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.id == id)
}
