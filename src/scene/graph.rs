//! Scene-graph construction and resolution.
//!
//! [`SceneGraph::build`] turns a [`SceneDocument`] into an acyclic object
//! graph in two passes:
//!
//! 1. **Local parse**: resource tables are populated, then every declared
//!    component resolves the parts that cannot forward-reference: its
//!    transform (inline ops or table ref), material list, texture binding,
//!    animation, and primitive children. Component children stay as raw ID
//!    strings. A component that fails locally is dropped with a warning;
//!    the rest of the scene loads.
//! 2. **Graph linking**: starting at the declared root, ID strings become
//!    arena keys. A child referencing a missing or dropped component is
//!    warned and skipped; a cycle on the current path is a fatal load
//!    error, as is a missing root.
//!
//! Components live in a single slotmap arena; the declaration data is left
//! untouched, so resolution never type-puns a half-linked child list.

use std::sync::Arc;

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::animation::{AnimationPlayer, KeyframeAnimation};
use crate::document::{
    ChildDecl, ComponentDecl, ComponentTransform, MaterialRef, SceneDocument, SceneGlobals,
    TextureRef,
};
use crate::errors::{ResourceKind, Result, SceneError};
use crate::render::Primitive;
use crate::resources::{transform, Material, ResourceTable, Texture};
use crate::scene::component::{
    AnimationKey, Child, Component, ComponentKey, MaterialBinding, TextureBinding,
};

/// The resolved, renderable scene.
#[derive(Debug)]
pub struct SceneGraph {
    pub(crate) components: SlotMap<ComponentKey, Component>,
    pub(crate) players: SlotMap<AnimationKey, AnimationPlayer>,
    root: ComponentKey,
    globals: SceneGlobals,
    default_camera_id: String,
}

impl SceneGraph {
    /// Builds and resolves the graph from a parsed document plus the
    /// primitives produced by the external factory.
    ///
    /// Local errors drop the offending resource or component and are
    /// reported through `log`; only a missing root or a cycle reachable
    /// from it fails the whole load.
    pub fn build(
        doc: &SceneDocument,
        primitives: Vec<(String, Arc<dyn Primitive>)>,
    ) -> Result<SceneGraph> {
        let tables = Tables::populate(doc, primitives);
        let pending = parse_components(doc, &tables);

        let mut linker = Linker {
            pending,
            states: FxHashMap::default(),
            components: SlotMap::with_key(),
            players: SlotMap::with_key(),
            player_keys: FxHashMap::default(),
        };

        let root = linker
            .link(&doc.root_id)?
            .ok_or_else(|| SceneError::RootMissing {
                id: doc.root_id.clone(),
            })?;

        let unreachable = linker
            .pending
            .values()
            .filter(|slot| slot.is_some())
            .count();
        if unreachable > 0 {
            debug!("{unreachable} component(s) unreachable from root; trimmed");
        }

        info!(
            "scene graph resolved: {} component(s), {} animation player(s), root {:?}",
            linker.components.len(),
            linker.players.len(),
            doc.root_id,
        );

        Ok(SceneGraph {
            components: linker.components,
            players: linker.players,
            root,
            globals: doc.globals,
            default_camera_id: doc.default_camera_id.clone(),
        })
    }

    #[must_use]
    pub fn root(&self) -> ComponentKey {
        self.root
    }

    #[must_use]
    pub fn globals(&self) -> &SceneGlobals {
        &self.globals
    }

    #[must_use]
    pub fn default_camera_id(&self) -> &str {
        &self.default_camera_id
    }

    #[must_use]
    pub fn component(&self, key: ComponentKey) -> Option<&Component> {
        self.components.get(key)
    }

    /// Linear search by declared ID; intended for tooling and tests, not
    /// the per-frame path.
    #[must_use]
    pub fn find_component(&self, id: &str) -> Option<ComponentKey> {
        self.components
            .iter()
            .find_map(|(key, c)| (c.id == id).then_some(key))
    }

    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

// ============================================================================
// Pass 1: resource tables + local component parse
// ============================================================================

struct Tables {
    materials: ResourceTable<Material>,
    textures: ResourceTable<Texture>,
    transformations: ResourceTable<glam::Mat4>,
    animations: ResourceTable<KeyframeAnimation>,
    primitives: ResourceTable<dyn Primitive>,
}

impl Tables {
    fn populate(doc: &SceneDocument, primitives: Vec<(String, Arc<dyn Primitive>)>) -> Self {
        let mut tables = Self {
            materials: ResourceTable::new(ResourceKind::Material),
            textures: ResourceTable::new(ResourceKind::Texture),
            transformations: ResourceTable::new(ResourceKind::Transformation),
            animations: ResourceTable::new(ResourceKind::Animation),
            primitives: ResourceTable::new(ResourceKind::Primitive),
        };

        for decl in &doc.materials {
            report(
                tables
                    .materials
                    .register(&decl.id, Arc::new(Material::from_decl(decl))),
            );
        }
        for decl in &doc.textures {
            report(
                tables
                    .textures
                    .register(&decl.id, Arc::new(Texture::from_decl(decl))),
            );
        }
        for decl in &doc.transformations {
            report(
                tables
                    .transformations
                    .register(&decl.id, Arc::new(transform::compose(&decl.ops))),
            );
        }
        for decl in &doc.animations {
            match KeyframeAnimation::new(&decl.id, &decl.keyframes, decl.is_loop) {
                Ok(clip) => report(tables.animations.register(&decl.id, Arc::new(clip))),
                Err(err) => warn!("dropping animation: {err}"),
            }
        }
        for (id, primitive) in primitives {
            report(tables.primitives.register(&id, primitive));
        }

        tables
    }
}

/// Warn-and-continue for duplicate registrations: the first wins.
fn report(result: Result<()>) {
    if let Err(err) = result {
        warn!("{err}; keeping first");
    }
}

/// A component that cleared the local pass; children still hold component
/// IDs as strings.
struct PendingComponent {
    id: String,
    transform: glam::Mat4,
    materials: SmallVec<[MaterialBinding; 2]>,
    texture: TextureBinding,
    animation: Option<(String, Arc<KeyframeAnimation>)>,
    children: Vec<PendingChild>,
}

enum PendingChild {
    Primitive(Arc<dyn Primitive>),
    ComponentRef(String),
}

fn parse_components(doc: &SceneDocument, tables: &Tables) -> FxHashMap<String, Option<PendingComponent>> {
    let mut pending: FxHashMap<String, Option<PendingComponent>> = FxHashMap::default();

    for decl in &doc.components {
        if pending.contains_key(&decl.id) {
            warn!(
                "{}; keeping first",
                SceneError::DuplicateId {
                    kind: ResourceKind::Component,
                    id: decl.id.clone(),
                }
            );
            continue;
        }
        match parse_component(decl, tables) {
            Ok(component) => {
                pending.insert(decl.id.clone(), Some(component));
            }
            Err(err) => warn!("dropping component {}: {err}", decl.id),
        }
    }

    pending
}

fn parse_component(decl: &ComponentDecl, tables: &Tables) -> Result<PendingComponent> {
    let transform = match &decl.transform {
        ComponentTransform::Ops(ops) => transform::compose(ops),
        ComponentTransform::Ref(id) => *tables.transformations.resolve(id)?,
    };

    if decl.materials.is_empty() {
        return Err(SceneError::MissingRequiredField {
            component: decl.id.clone(),
            field: "materials",
        });
    }
    let mut materials = SmallVec::new();
    for entry in &decl.materials {
        materials.push(match entry {
            MaterialRef::Inherit => MaterialBinding::Inherit,
            MaterialRef::Id(id) => MaterialBinding::Concrete(tables.materials.resolve(id)?),
        });
    }

    let texture = match &decl.texture {
        TextureRef::Absent => TextureBinding::Absent,
        TextureRef::Inherit => TextureBinding::Inherit,
        TextureRef::Texture {
            id,
            length_s,
            length_t,
        } => {
            let texture = tables.textures.resolve(id)?;
            TextureBinding::Concrete {
                length_s: length_s.unwrap_or(texture.length_s),
                length_t: length_t.unwrap_or(texture.length_t),
                texture,
            }
        }
    };

    let animation = match &decl.animation {
        // Resolved here so a dangling reference drops the component at
        // load time rather than surfacing mid-render.
        Some(id) => Some((id.clone(), tables.animations.resolve(id)?)),
        None => None,
    };

    if decl.children.is_empty() {
        return Err(SceneError::MissingRequiredField {
            component: decl.id.clone(),
            field: "children",
        });
    }
    let mut children = Vec::with_capacity(decl.children.len());
    for child in &decl.children {
        children.push(match child {
            ChildDecl::Primitive(id) => PendingChild::Primitive(tables.primitives.resolve(id)?),
            ChildDecl::Component(id) => PendingChild::ComponentRef(id.clone()),
        });
    }

    Ok(PendingComponent {
        id: decl.id.clone(),
        transform,
        materials,
        texture,
        animation,
        children,
    })
}

// ============================================================================
// Pass 2: graph linking
// ============================================================================

#[derive(Clone, Copy, PartialEq)]
enum LinkState {
    /// Currently on the resolution path; revisiting means a cycle.
    InProgress,
    Done(ComponentKey),
}

struct Linker {
    pending: FxHashMap<String, Option<PendingComponent>>,
    states: FxHashMap<String, LinkState>,
    components: SlotMap<ComponentKey, Component>,
    players: SlotMap<AnimationKey, AnimationPlayer>,
    /// One shared player per animation, matching the shared `start_instant`
    /// of the clip, however many components reference it.
    player_keys: FxHashMap<String, AnimationKey>,
}

impl Linker {
    /// Resolves `id` to an arena key, recursively linking its subtree.
    ///
    /// `Ok(None)` means the component does not exist (undeclared or dropped
    /// in pass 1) and the caller decides whether that is fatal. A cycle is
    /// always fatal.
    fn link(&mut self, id: &str) -> Result<Option<ComponentKey>> {
        match self.states.get(id) {
            Some(LinkState::Done(key)) => return Ok(Some(*key)),
            Some(LinkState::InProgress) => {
                return Err(SceneError::CyclicReference { id: id.to_owned() })
            }
            None => {}
        }

        let Some(pending) = self.pending.get_mut(id).and_then(Option::take) else {
            return Ok(None);
        };

        self.states.insert(id.to_owned(), LinkState::InProgress);

        let mut children = Vec::with_capacity(pending.children.len());
        for child in pending.children {
            match child {
                PendingChild::Primitive(primitive) => children.push(Child::Primitive(primitive)),
                PendingChild::ComponentRef(child_id) => match self.link(&child_id)? {
                    Some(key) => children.push(Child::Component(key)),
                    None => warn!(
                        "component {id}: child {child_id} missing or dropped; skipping"
                    ),
                },
            }
        }

        // All of this component's named children failed to resolve; an
        // empty node has nothing to render and would violate the
        // non-empty-children invariant.
        if children.is_empty() {
            warn!("component {id}: no resolvable children; dropping");
            self.states.remove(id);
            return Ok(None);
        }

        let animation = pending
            .animation
            .map(|(anim_id, clip)| self.player_for(&anim_id, clip));

        let key = self.components.insert(Component {
            id: pending.id,
            transform: pending.transform,
            materials: pending.materials,
            texture: pending.texture,
            animation,
            children,
        });
        self.states.insert(id.to_owned(), LinkState::Done(key));
        Ok(Some(key))
    }

    fn player_for(&mut self, animation_id: &str, clip: Arc<KeyframeAnimation>) -> AnimationKey {
        if let Some(&key) = self.player_keys.get(animation_id) {
            return key;
        }
        let key = self.players.insert(AnimationPlayer::new(clip));
        self.player_keys.insert(animation_id.to_owned(), key);
        key
    }
}
