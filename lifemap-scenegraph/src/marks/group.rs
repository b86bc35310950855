use crate::marks::mark::SceneMark;
use serde::{Deserialize, Serialize};

/// A named container that translates its children by `origin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: [f32; 2]) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_mark(mut self, mark: impl Into<SceneMark>) -> Self {
        self.marks.push(mark.into());
        self
    }

    pub fn push(&mut self, mark: impl Into<SceneMark>) {
        self.marks.push(mark.into());
    }

    /// Returns the paths of all nested groups, relative to this group
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }

    /// Depth-first search for a nested group by name
    pub fn find_group(&self, name: &str) -> Option<&SceneGroup> {
        self.marks.iter().find_map(|mark| {
            let SceneMark::Group(group) = mark else {
                return None;
            };
            if group.name == name {
                Some(group)
            } else {
                group.find_group(name)
            }
        })
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
