//! Headless document: named regions holding HTML fragments, updated by commands.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;

use catalog_core::FocusTarget;
use catalog_logging::catalog_warn;

/// Element id of a region.
pub type RegionId = &'static str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    CreateRegion {
        id: RegionId,
        parent: Option<RegionId>,
        tag: &'static str,
    },
    /// Replace the region's content with trusted markup.
    SetHtml { id: RegionId, html: String },
    /// Replace the region's content with escaped text.
    SetText { id: RegionId, text: String },
    SetClass {
        id: RegionId,
        class: &'static str,
        on: bool,
    },
    /// Set an attribute, or remove it with `None`.
    SetAttribute {
        id: RegionId,
        name: &'static str,
        value: Option<String>,
    },
}

impl DomCommand {
    pub fn region(&self) -> RegionId {
        match self {
            DomCommand::CreateRegion { id, .. }
            | DomCommand::SetHtml { id, .. }
            | DomCommand::SetText { id, .. }
            | DomCommand::SetClass { id, .. }
            | DomCommand::SetAttribute { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    pub tag: &'static str,
    pub parent: Option<RegionId>,
    pub classes: BTreeSet<&'static str>,
    pub attributes: BTreeMap<&'static str, String>,
    pub content: String,
}

impl Region {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    order: Vec<RegionId>,
    regions: HashMap<RegionId, Region>,
    focused: FocusTarget,
    scroll_y: u32,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `command`; returns whether the region changed.
    pub fn apply(&mut self, command: DomCommand) -> bool {
        match command {
            DomCommand::CreateRegion { id, parent, tag } => {
                if self.regions.contains_key(id) {
                    return false;
                }
                self.order.push(id);
                self.regions.insert(
                    id,
                    Region {
                        tag,
                        parent,
                        ..Region::default()
                    },
                );
                true
            }
            DomCommand::SetHtml { id, html } => {
                self.with_region(id, |region| replace(&mut region.content, html))
            }
            DomCommand::SetText { id, text } => self.with_region(id, |region| {
                replace(&mut region.content, escape_html(&text))
            }),
            DomCommand::SetClass { id, class, on } => self.with_region(id, |region| {
                if on {
                    region.classes.insert(class)
                } else {
                    region.classes.remove(class)
                }
            }),
            DomCommand::SetAttribute { id, name, value } => {
                self.with_region(id, |region| match value {
                    Some(value) => region.attributes.insert(name, value.clone()) != Some(value),
                    None => region.attributes.remove(name).is_some(),
                })
            }
        }
    }

    /// Applies every command; returns the ids of changed regions in first-change order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = DomCommand>) -> Vec<RegionId> {
        let mut changed = Vec::new();
        for command in commands {
            let id = command.region();
            if self.apply(command) && !changed.contains(&id) {
                changed.push(id);
            }
        }
        changed
    }

    fn with_region(&mut self, id: RegionId, change: impl FnOnce(&mut Region) -> bool) -> bool {
        match self.regions.get_mut(id) {
            Some(region) => change(region),
            None => {
                catalog_warn!("command for unknown region {}", id);
                false
            }
        }
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn focused(&self) -> &FocusTarget {
        &self.focused
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focused = target;
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, offset: u32) {
        self.scroll_y = offset;
    }

    /// Serialized markup of region `id` and its descendants.
    pub fn outer_html(&self, id: &str) -> Option<String> {
        let mut out = String::new();
        self.write_region(&mut out, id)?;
        Some(out)
    }

    /// Serialized markup of every top-level region.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for id in self.order.iter().filter(|id| self.parent_of(id).is_none()) {
            self.write_region(&mut out, id);
        }
        out
    }

    fn parent_of(&self, id: &str) -> Option<RegionId> {
        self.regions.get(id).and_then(|region| region.parent)
    }

    /// Opening tag and own content of region `id`, without descendants.
    pub fn snapshot(&self, id: &str) -> Option<String> {
        let region = self.regions.get(id)?;
        let mut out = String::new();
        write_open_tag(&mut out, id, region);
        out.push_str(&region.content);
        Some(out)
    }

    fn write_region(&self, out: &mut String, id: &str) -> Option<()> {
        let region = self.regions.get(id)?;
        write_open_tag(out, id, region);
        out.push_str(&region.content);
        for child in self
            .order
            .iter()
            .filter(|child| self.parent_of(child) == Some(id))
        {
            self.write_region(out, child);
        }
        let _ = writeln!(out, "</{}>", region.tag);
        Some(())
    }
}

fn write_open_tag(out: &mut String, id: &str, region: &Region) {
    let _ = write!(out, "<{} id=\"{}\"", region.tag, id);
    if !region.classes.is_empty() {
        let classes: Vec<&str> = region.classes.iter().copied().collect();
        let _ = write!(out, " class=\"{}\"", classes.join(" "));
    }
    for (name, value) in &region.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
    }
    out.push('>');
}

fn replace(slot: &mut String, value: String) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Escapes `& < > " '` for interpolation into markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
