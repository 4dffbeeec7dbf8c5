//! Parameterized families: a labeled path skeleton plus attachment groups.
//!
//! Every group adds a fixed number of extra vertices, all attached to one
//! skeleton vertex picked from the group's choices. A configuration picks one
//! choice per group; the family is the set of graphs over every
//! configuration.

use std::{collections::HashSet, fmt, sync::Arc};

use crate::{
    error::{GraphError, SkeletonError},
    graph::Graph,
};

/// Largest configuration space a family may enumerate.
pub const MAX_CONFIGURATIONS: usize = 65_536;

/// A path of uniquely labeled skeleton vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skeleton {
    labels: Vec<Arc<str>>,
}

impl Skeleton {
    /// Builds a path skeleton from its labels, in path order.
    ///
    /// # Errors
    /// Returns [`SkeletonError::EmptySkeleton`] for no labels and
    /// [`SkeletonError::DuplicateLabel`] when a label repeats.
    pub fn path<L: Into<Arc<str>>>(
        labels: impl IntoIterator<Item = L>,
    ) -> Result<Self, SkeletonError> {
        let labels: Vec<Arc<str>> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(SkeletonError::EmptySkeleton);
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label) {
                return Err(SkeletonError::DuplicateLabel {
                    label: Arc::clone(label),
                });
            }
        }
        Ok(Self { labels })
    }

    /// Labels in path order.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[Arc<str>] { &self.labels }

    /// Number of skeleton vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Skeletons always hold at least one vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Position of `label` along the path.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| &**candidate == label)
    }
}

/// An unresolved attachment group as supplied by callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentGroup {
    label: Arc<str>,
    size: usize,
    choices: Vec<Arc<str>>,
}

impl AttachmentGroup {
    /// A group adding `size` vertices to one of the skeleton vertices named
    /// in `choices`.
    pub fn new<L: Into<Arc<str>>>(
        label: impl Into<Arc<str>>,
        size: usize,
        choices: impl IntoIterator<Item = L>,
    ) -> Self {
        Self {
            label: label.into(),
            size,
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// An attachment group whose choices are skeleton indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGroup {
    label: Arc<str>,
    size: usize,
    choices: Vec<usize>,
}

impl ResolvedGroup {
    /// Group label, used to name its extra vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> &str { &self.label }

    /// Number of extra vertices the group adds.
    #[must_use]
    #[rustfmt::skip]
    pub fn size(&self) -> usize { self.size }

    /// Skeleton indices the group may attach to.
    #[must_use]
    #[rustfmt::skip]
    pub fn choices(&self) -> &[usize] { &self.choices }
}

/// One attachment decision inside a [`Configuration`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attachment {
    /// Label of the attachment group.
    pub group: Arc<str>,
    /// Label of the skeleton vertex the group joins.
    pub anchor: Arc<str>,
}

/// One choice per attachment group, identified by its position in
/// enumeration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    index: usize,
    choices: Box<[usize]>,
    attachments: Arc<[Attachment]>,
}

impl Configuration {
    /// Position of the configuration in enumeration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }

    /// Index into each group's choice list.
    #[must_use]
    #[rustfmt::skip]
    pub fn choices(&self) -> &[usize] { &self.choices }

    /// The anchor each group attaches to, in group order.
    #[must_use]
    #[rustfmt::skip]
    pub fn attachments(&self) -> &[Attachment] { &self.attachments }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, attachment) in self.attachments.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}->{}", attachment.group, attachment.anchor)?;
        }
        Ok(())
    }
}

/// A validated family description.
///
/// # Examples
/// ```
/// use eccentree_core::{AttachmentGroup, FamilySpec, Skeleton};
///
/// let skeleton = Skeleton::path(["a", "b", "c"])?;
/// let family = FamilySpec::new(
///     skeleton,
///     vec![AttachmentGroup::new("X", 2, ["a", "b"])],
/// )?;
/// assert_eq!(family.configuration_count(), 2);
/// assert_eq!(family.vertex_count(), 5);
/// assert_eq!(family.vertex_labels()[4], "X_2");
/// # Ok::<(), eccentree_core::SkeletonError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilySpec {
    skeleton: Skeleton,
    groups: Vec<ResolvedGroup>,
    configuration_count: usize,
}

impl FamilySpec {
    /// Resolves every group's choices against the skeleton.
    ///
    /// # Errors
    /// Returns [`SkeletonError::EmptyGroup`] for a group of size zero,
    /// [`SkeletonError::NoChoices`] for a group without choices,
    /// [`SkeletonError::UnknownAttachment`] for a choice the skeleton lacks,
    /// and [`SkeletonError::TooManyConfigurations`] when the product of
    /// choice counts exceeds [`MAX_CONFIGURATIONS`].
    pub fn new(skeleton: Skeleton, groups: Vec<AttachmentGroup>) -> Result<Self, SkeletonError> {
        let mut resolved = Vec::with_capacity(groups.len());
        for group in groups {
            if group.size == 0 {
                return Err(SkeletonError::EmptyGroup { group: group.label });
            }
            if group.choices.is_empty() {
                return Err(SkeletonError::NoChoices { group: group.label });
            }
            let choices = group
                .choices
                .iter()
                .map(|label| {
                    skeleton
                        .index_of(label)
                        .ok_or_else(|| SkeletonError::UnknownAttachment {
                            group: Arc::clone(&group.label),
                            label: Arc::clone(label),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            resolved.push(ResolvedGroup {
                label: group.label,
                size: group.size,
                choices,
            });
        }

        let configuration_count = resolved
            .iter()
            .try_fold(1usize, |product, group| {
                product
                    .checked_mul(group.choices.len())
                    .filter(|&count| count <= MAX_CONFIGURATIONS)
            })
            .ok_or(SkeletonError::TooManyConfigurations {
                max: MAX_CONFIGURATIONS,
            })?;

        Ok(Self {
            skeleton,
            groups: resolved,
            configuration_count,
        })
    }

    /// The caterpillar family: the path `u_7 … u_1 u v_1 … v_7` with groups
    /// `V1..V6` of sizes 3, 4, 2, 3, 3 and 4, where `Vi` joins `u_i` or `v_i`.
    #[must_use]
    pub fn caterpillar() -> Self {
        const ARMS: usize = 7;
        const SIZES: [usize; 6] = [3, 4, 2, 3, 3, 4];

        let labels = (1..=ARMS)
            .rev()
            .map(|i| format!("u_{i}"))
            .chain(std::iter::once("u".to_owned()))
            .chain((1..=ARMS).map(|i| format!("v_{i}")))
            .map(Arc::<str>::from)
            .collect();
        let groups: Vec<ResolvedGroup> = SIZES
            .iter()
            .enumerate()
            .map(|(offset, &size)| {
                let i = offset + 1;
                ResolvedGroup {
                    label: Arc::from(format!("V{i}")),
                    size,
                    choices: vec![ARMS - i, ARMS + i],
                }
            })
            .collect();
        Self {
            skeleton: Skeleton { labels },
            configuration_count: 1 << groups.len(),
            groups,
        }
    }

    /// The skeleton path.
    #[must_use]
    #[rustfmt::skip]
    pub fn skeleton(&self) -> &Skeleton { &self.skeleton }

    /// Attachment groups in order.
    #[must_use]
    #[rustfmt::skip]
    pub fn groups(&self) -> &[ResolvedGroup] { &self.groups }

    /// Number of configurations the family enumerates.
    #[must_use]
    #[rustfmt::skip]
    pub fn configuration_count(&self) -> usize { self.configuration_count }

    /// Vertices in every member: skeleton plus all extra vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.skeleton.len() + self.groups.iter().map(ResolvedGroup::size).sum::<usize>()
    }

    /// Labels in vertex order: skeleton labels, then `{group}_{j}` with `j`
    /// counting from 1 within each group.
    #[must_use]
    pub fn vertex_labels(&self) -> Vec<String> {
        let skeleton = self.skeleton.labels.iter().map(ToString::to_string);
        let extras = self
            .groups
            .iter()
            .flat_map(|group| (1..=group.size).map(move |j| format!("{}_{j}", group.label)));
        skeleton.chain(extras).collect()
    }

    /// Configurations in lexicographic order of choice indices, with the
    /// last group varying fastest.
    #[must_use]
    pub fn configurations(&self) -> Configurations<'_> {
        Configurations {
            family: self,
            next: Some(vec![0; self.groups.len()]),
            index: 0,
        }
    }

    /// Builds the graph for one configuration.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when the configuration's choice
    /// indices do not belong to this family.
    pub fn build(&self, configuration: &Configuration) -> Result<Graph, GraphError> {
        let spine = self.skeleton.len();
        let mut edges: Vec<(usize, usize)> = (1..spine).map(|v| (v - 1, v)).collect();
        let mut next_vertex = spine;
        for (group, &choice) in self.groups.iter().zip(configuration.choices.iter()) {
            let anchor = group
                .choices
                .get(choice)
                .copied()
                .ok_or(GraphError::UnknownVertex {
                    vertex: choice,
                    vertex_count: group.choices.len(),
                })?;
            for _ in 0..group.size {
                edges.push((anchor, next_vertex));
                next_vertex += 1;
            }
        }
        Graph::from_edges(next_vertex, edges)
    }

    fn configuration(&self, index: usize, choices: &[usize]) -> Configuration {
        let attachments = self
            .groups
            .iter()
            .zip(choices)
            .map(|(group, &choice)| Attachment {
                group: Arc::clone(&group.label),
                anchor: group
                    .choices
                    .get(choice)
                    .and_then(|&vertex| self.skeleton.labels.get(vertex))
                    .map_or_else(|| Arc::from("?"), Arc::clone),
            })
            .collect();
        Configuration {
            index,
            choices: choices.into(),
            attachments,
        }
    }
}

/// Odometer over a family's configurations.
#[derive(Debug)]
pub struct Configurations<'a> {
    family: &'a FamilySpec,
    next: Option<Vec<usize>>,
    index: usize,
}

impl Iterator for Configurations<'_> {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        let current = self.next.take()?;
        let configuration = self.family.configuration(self.index, &current);
        self.index += 1;

        let mut advanced = current;
        for (position, group) in self.family.groups.iter().enumerate().rev() {
            advanced[position] += 1;
            if advanced[position] < group.choices.len() {
                self.next = Some(advanced);
                return Some(configuration);
            }
            advanced[position] = 0;
        }
        Some(configuration)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next.is_some() {
            self.family.configuration_count - self.index
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}
