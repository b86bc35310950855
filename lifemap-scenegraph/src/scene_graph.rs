use std::collections::HashMap;

use crate::error::LifemapSceneGraphError;
use crate::marks::{group::SceneGroup, mark::SceneMark};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            marks: vec![],
            width,
            height,
            origin: [0.0, 0.0],
        }
    }

    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Returns the absolute origin of a group
    pub fn get_absolute_origin(&self, group_path: &[usize]) -> Option<[f32; 2]> {
        let mut origin = self.origin;
        let mut children = &self.marks;
        for index in group_path {
            let SceneMark::Group(group) = children.get(*index)? else {
                return None;
            };
            origin = [origin[0] + group.origin[0], origin[1] + group.origin[1]];
            children = &group.marks;
        }
        Some(origin)
    }

    /// Returns all of the group paths in the scene graph
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

    /// Returns mapping from the names of each named group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            let Some(SceneMark::Group(group)) = self.get_mark(&path) else {
                continue;
            };
            names.insert(group.name.clone(), path);
        }
        names
    }

    /// Top-level group with the given name
    pub fn group(&self, name: &str) -> Option<&SceneGroup> {
        self.groups().into_iter().find(|g| g.name == name)
    }

    /// Removes every top-level group named `name`, returning how many were removed
    pub fn remove_group(&mut self, name: &str) -> usize {
        let before = self.marks.len();
        self.marks
            .retain(|m| !matches!(m, SceneMark::Group(g) if g.name == name));
        before - self.marks.len()
    }

    /// Installs `group`, replacing any top-level group with the same name.
    ///
    /// The new group takes the position of the first group it replaces so the
    /// paint order of the other marks is unchanged, and is appended otherwise.
    pub fn replace_group(&mut self, group: SceneGroup) -> Option<SceneGroup> {
        let position = self
            .marks
            .iter()
            .position(|m| matches!(m, SceneMark::Group(g) if g.name == group.name));

        let Some(position) = position else {
            self.marks.push(SceneMark::Group(group));
            return None;
        };

        let name = group.name.clone();
        let previous = std::mem::replace(&mut self.marks[position], SceneMark::Group(group));
        // Drop any later duplicates left by earlier appends
        let mut index = 0;
        self.marks.retain(|m| {
            let keep = index == position
                || !matches!(m, SceneMark::Group(g) if g.name == name);
            index += 1;
            keep
        });

        match previous {
            SceneMark::Group(previous) => Some(previous),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), LifemapSceneGraphError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LifemapSceneGraphError::InternalError(format!(
                "Scene graph dimensions must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        self.marks.iter().try_for_each(|m| m.validate())
    }
}
