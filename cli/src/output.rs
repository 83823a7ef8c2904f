use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMethod {
    Shortest,
    DepthFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexReport {
    pub id: String,
    pub neighbors: Vec<String>,
}

/// Result of one command, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Show {
        directed: bool,
        edge_count: usize,
        vertices: Vec<VertexReport>,
    },
    Traversal {
        strategy: Strategy,
        start: String,
        visited: Vec<String>,
    },
    Path {
        from: String,
        to: String,
        method: PathMethod,
        path: Option<Vec<String>>,
    },
    Distance {
        start: String,
        distance: usize,
        vertices: Vec<String>,
    },
    Bipartite {
        bipartite: bool,
        left: Vec<String>,
        right: Vec<String>,
    },
    Components {
        components: Vec<Vec<String>>,
    },
}

pub fn render(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_human(report: &Report) -> String {
    match report {
        Report::Show {
            directed,
            edge_count,
            vertices,
        } => {
            let kind = if *directed { "Directed" } else { "Undirected" };
            let mut lines = vec![format!(
                "{} graph: {} vertices, {} edges",
                kind,
                vertices.len(),
                edge_count
            )];
            lines.extend(
                vertices
                    .iter()
                    .map(|v| format!("{} adjacent to [{}]", v.id, v.neighbors.join(", "))),
            );
            lines.join("\n")
        }
        Report::Traversal { visited, .. } => visited
            .iter()
            .map(|id| format!("Processing vertex {}", id))
            .collect::<Vec<_>>()
            .join("\n"),
        Report::Path { from, to, path, .. } => match path {
            Some(p) => format!("{} ({} hops)", p.join(" -> "), p.len().saturating_sub(1)),
            None => format!("No path from {} to {}", from, to),
        },
        Report::Distance {
            start,
            distance,
            vertices,
        } => {
            if vertices.is_empty() {
                format!("No vertices {} away from {}", distance, start)
            } else {
                format!(
                    "Vertices {} away from {}: {}",
                    distance,
                    start,
                    vertices.join(", ")
                )
            }
        }
        Report::Bipartite {
            bipartite,
            left,
            right,
        } => {
            if *bipartite {
                format!(
                    "Bipartite: yes\n  left: {}\n  right: {}",
                    left.join(", "),
                    right.join(", ")
                )
            } else {
                "Bipartite: no".to_string()
            }
        }
        Report::Components { components } => components
            .iter()
            .enumerate()
            .map(|(i, members)| format!("Component {}: {}", i + 1, members.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_human_path() {
        let found = Report::Path {
            from: "A".into(),
            to: "C".into(),
            method: PathMethod::Shortest,
            path: Some(ids(&["A", "B", "C"])),
        };
        assert_eq!(render_human(&found), "A -> B -> C (2 hops)");

        let missing = Report::Path {
            from: "C".into(),
            to: "A".into(),
            method: PathMethod::Shortest,
            path: None,
        };
        assert_eq!(render_human(&missing), "No path from C to A");
    }

    #[test]
    fn test_human_traversal_and_components() {
        let t = Report::Traversal {
            strategy: Strategy::BreadthFirst,
            start: "A".into(),
            visited: ids(&["A", "B"]),
        };
        assert_eq!(render_human(&t), "Processing vertex A\nProcessing vertex B");

        let c = Report::Components {
            components: vec![ids(&["A", "B"]), ids(&["C"])],
        };
        assert_eq!(render_human(&c), "Component 1: A, B\nComponent 2: C");
    }

    #[test]
    fn test_human_show_and_bipartite() {
        let show = Report::Show {
            directed: true,
            edge_count: 1,
            vertices: vec![
                VertexReport {
                    id: "A".into(),
                    neighbors: ids(&["B"]),
                },
                VertexReport {
                    id: "B".into(),
                    neighbors: vec![],
                },
            ],
        };
        assert_eq!(
            render_human(&show),
            "Directed graph: 2 vertices, 1 edges\nA adjacent to [B]\nB adjacent to []"
        );

        let no = Report::Bipartite {
            bipartite: false,
            left: vec![],
            right: vec![],
        };
        assert_eq!(render_human(&no), "Bipartite: no");
    }

    #[test]
    fn test_json_is_tagged() {
        let d = Report::Distance {
            start: "A".into(),
            distance: 2,
            vertices: ids(&["C"]),
        };
        let json = render(&d, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "distance");
        assert_eq!(value["distance"], 2);
        assert_eq!(value["vertices"], serde_json::json!(["C"]));

        let p = Report::Path {
            from: "A".into(),
            to: "B".into(),
            method: PathMethod::DepthFirst,
            path: None,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render(&p, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["method"], "depth_first");
        assert!(value["path"].is_null());
    }
}
