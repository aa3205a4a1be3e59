//! Command definitions and their handlers.
//!
//! Each command has its own clap argument struct that converts into the
//! interface-agnostic types of `studio_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Manager / Controller
//! ```
//!
//! Studio commands go straight to the [`Manager`]. Item mutations go through
//! a [`ReorderController`] loaded for the one collection they touch, so the
//! CLI follows the same busy, rollback and notification rules as any other
//! client of the lists.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use studio_core::{
    controller::ReorderController,
    display::{CreateResult, DeleteResult, Items, ReorderResult, Studios, UpdateResult},
    gateway::{RetryingGateway, SqliteGateway},
    models::{CollectionId, CollectionKind, ItemPayload},
    params::{AddItem, CreateStudio, ItemRef, RenameStudio, Reorder, Slug},
    reorder::{Direction, ReorderIntent},
    Manager,
};

use crate::renderer::{TerminalNotifier, TerminalRenderer};

type ListController = ReorderController<RetryingGateway<SqliteGateway>, TerminalNotifier>;

// ============================================================================
// Studio commands
// ============================================================================

/// Create a new studio
#[derive(Args)]
pub struct CreateStudioArgs {
    /// Unique slug (lowercase letters, digits and '-')
    pub slug: String,
    /// Display name of the studio
    pub name: String,
}

impl From<CreateStudioArgs> for CreateStudio {
    fn from(val: CreateStudioArgs) -> Self {
        CreateStudio {
            slug: val.slug,
            name: val.name,
        }
    }
}

/// Select a studio by slug
#[derive(Args)]
pub struct SlugArgs {
    /// Slug of the studio
    pub slug: String,
}

impl From<SlugArgs> for Slug {
    fn from(val: SlugArgs) -> Self {
        Slug { slug: val.slug }
    }
}

/// Change a studio's display name
#[derive(Args)]
pub struct RenameStudioArgs {
    /// Slug of the studio
    pub slug: String,
    /// New display name
    pub name: String,
}

impl From<RenameStudioArgs> for RenameStudio {
    fn from(val: RenameStudioArgs) -> Self {
        RenameStudio {
            slug: val.slug,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum StudioCommands {
    /// Create a new studio
    #[command(alias = "c")]
    Create(CreateStudioArgs),
    /// List all studios
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a studio with all of its lists
    #[command(alias = "s")]
    Show(SlugArgs),
    /// Change a studio's display name
    Rename(RenameStudioArgs),
    /// Delete a studio and everything in it
    #[command(aliases = ["d", "rm"])]
    Delete(SlugArgs),
}

// ============================================================================
// Item commands
// ============================================================================

/// Select one list of a studio
#[derive(Args)]
pub struct CollectionArgs {
    /// Slug of the studio
    pub studio: String,
    /// Which list: stage, phone, condition or link
    pub kind: CollectionKind,
}

impl From<CollectionArgs> for CollectionId {
    fn from(val: CollectionArgs) -> Self {
        CollectionId::new(val.studio, val.kind)
    }
}

/// Append a pipeline stage
#[derive(Args)]
pub struct AddStageArgs {
    /// Slug of the studio
    pub studio: String,
    /// Name of the stage
    pub name: String,
    /// Color used to tag the stage
    #[arg(short, long)]
    pub color: Option<String>,
}

impl From<AddStageArgs> for AddItem {
    fn from(val: AddStageArgs) -> Self {
        AddItem {
            collection: CollectionId::new(val.studio, CollectionKind::PipelineStage),
            payload: ItemPayload::PipelineStage {
                name: val.name,
                color: val.color,
            },
        }
    }
}

/// Append a phone number
#[derive(Args)]
pub struct AddPhoneArgs {
    /// Slug of the studio
    pub studio: String,
    /// The phone number
    pub number: String,
    /// What the number is for
    #[arg(short, long)]
    pub label: Option<String>,
}

impl From<AddPhoneArgs> for AddItem {
    fn from(val: AddPhoneArgs) -> Self {
        AddItem {
            collection: CollectionId::new(val.studio, CollectionKind::PhoneNumber),
            payload: ItemPayload::PhoneNumber {
                number: val.number,
                label: val.label,
            },
        }
    }
}

/// Append a commercial condition
#[derive(Args)]
pub struct AddConditionArgs {
    /// Slug of the studio
    pub studio: String,
    /// Name of the condition
    pub name: String,
    /// Longer explanation shown to clients
    #[arg(short, long)]
    pub description: Option<String>,
    /// Discount in percent (0-100)
    #[arg(long)]
    pub discount: Option<f64>,
}

impl From<AddConditionArgs> for AddItem {
    fn from(val: AddConditionArgs) -> Self {
        AddItem {
            collection: CollectionId::new(val.studio, CollectionKind::CommercialCondition),
            payload: ItemPayload::CommercialCondition {
                name: val.name,
                description: val.description,
                discount_percent: val.discount,
            },
        }
    }
}

/// Append a social link
#[derive(Args)]
pub struct AddLinkArgs {
    /// Slug of the studio
    pub studio: String,
    /// Platform name, e.g. Instagram
    pub platform: String,
    /// Profile URL
    pub url: String,
}

impl From<AddLinkArgs> for AddItem {
    fn from(val: AddLinkArgs) -> Self {
        AddItem {
            collection: CollectionId::new(val.studio, CollectionKind::SocialLink),
            payload: ItemPayload::SocialLink {
                platform: val.platform,
                url: val.url,
            },
        }
    }
}

/// Select one item of a list
#[derive(Args)]
pub struct ItemRefArgs {
    /// Slug of the studio
    pub studio: String,
    /// Which list: stage, phone, condition or link
    pub kind: CollectionKind,
    /// ID of the item, e.g. ps_3
    pub id: String,
}

impl From<ItemRefArgs> for ItemRef {
    fn from(val: ItemRefArgs) -> Self {
        ItemRef {
            collection: CollectionId::new(val.studio, val.kind),
            id: val.id,
        }
    }
}

/// Change fields of an item
///
/// Only the flags that apply to the item's list are accepted; omitted flags
/// keep their current value.
#[derive(Args)]
pub struct UpdateItemArgs {
    #[command(flatten)]
    pub item: ItemRefArgs,
    /// New name (stages and conditions)
    #[arg(long)]
    pub name: Option<String>,
    /// New color (stages)
    #[arg(long)]
    pub color: Option<String>,
    /// New number (phones)
    #[arg(long)]
    pub number: Option<String>,
    /// New label (phones)
    #[arg(long)]
    pub label: Option<String>,
    /// New description (conditions)
    #[arg(long)]
    pub description: Option<String>,
    /// New discount in percent (conditions)
    #[arg(long)]
    pub discount: Option<f64>,
    /// New platform (links)
    #[arg(long)]
    pub platform: Option<String>,
    /// New URL (links)
    #[arg(long)]
    pub url: Option<String>,
}

impl UpdateItemArgs {
    /// Merges the given flags into `current`, listing what changed.
    fn apply(&self, current: &ItemPayload) -> Result<(ItemPayload, Vec<String>)> {
        if let Some(flag) = self.stray_flag(current.kind()) {
            bail!("--{flag} does not apply to {} items", current.kind());
        }

        let mut changes = Vec::new();
        let mut payload = current.clone();
        match &mut payload {
            ItemPayload::PipelineStage { name, color } => {
                set_field(&mut changes, "Name", &self.name, name);
                set_optional(&mut changes, "Color", &self.color, color);
            }
            ItemPayload::PhoneNumber { number, label } => {
                set_field(&mut changes, "Number", &self.number, number);
                set_optional(&mut changes, "Label", &self.label, label);
            }
            ItemPayload::CommercialCondition {
                name,
                description,
                discount_percent,
            } => {
                set_field(&mut changes, "Name", &self.name, name);
                if let Some(value) = &self.description {
                    changes.push("Description updated".to_string());
                    *description = Some(value.clone());
                }
                if let Some(value) = self.discount {
                    changes.push(format!("Discount set to {value}%"));
                    *discount_percent = Some(value);
                }
            }
            ItemPayload::SocialLink { platform, url } => {
                set_field(&mut changes, "Platform", &self.platform, platform);
                set_field(&mut changes, "URL", &self.url, url);
            }
        }

        if changes.is_empty() {
            bail!("Nothing to update; pass at least one field flag");
        }
        Ok((payload, changes))
    }

    /// First flag given that has no meaning for items of `kind`.
    fn stray_flag(&self, kind: CollectionKind) -> Option<&'static str> {
        use CollectionKind::*;

        let flags: [(&'static str, bool, &[CollectionKind]); 8] = [
            ("name", self.name.is_some(), &[PipelineStage, CommercialCondition]),
            ("color", self.color.is_some(), &[PipelineStage]),
            ("number", self.number.is_some(), &[PhoneNumber]),
            ("label", self.label.is_some(), &[PhoneNumber]),
            ("description", self.description.is_some(), &[CommercialCondition]),
            ("discount", self.discount.is_some(), &[CommercialCondition]),
            ("platform", self.platform.is_some(), &[SocialLink]),
            ("url", self.url.is_some(), &[SocialLink]),
        ];

        flags
            .into_iter()
            .find(|(_, given, kinds)| *given && !kinds.contains(&kind))
            .map(|(flag, _, _)| flag)
    }
}

fn set_field(changes: &mut Vec<String>, field: &str, value: &Option<String>, target: &mut String) {
    if let Some(value) = value {
        changes.push(format!("{field} set to '{value}'"));
        *target = value.clone();
    }
}

fn set_optional(
    changes: &mut Vec<String>,
    field: &str,
    value: &Option<String>,
    target: &mut Option<String>,
) {
    if let Some(value) = value {
        changes.push(format!("{field} set to '{value}'"));
        *target = Some(value.clone());
    }
}

/// Drag one item onto the slot of another
#[derive(Args)]
pub struct MoveItemArgs {
    /// Slug of the studio
    pub studio: String,
    /// Which list: stage, phone, condition or link
    pub kind: CollectionKind,
    /// ID of the item to move
    pub source_id: String,
    /// ID of the item whose slot it takes
    pub target_id: String,
}

impl From<MoveItemArgs> for Reorder {
    fn from(val: MoveItemArgs) -> Self {
        Reorder {
            collection: CollectionId::new(val.studio, val.kind),
            intent: ReorderIntent::drag(val.source_id, val.target_id),
        }
    }
}

/// Move an item one place
#[derive(Args)]
pub struct StepItemArgs {
    /// Slug of the studio
    pub studio: String,
    /// Which list: stage, phone, condition or link
    pub kind: CollectionKind,
    /// Rank of the item as shown in listings (1 is first)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub rank: u32,
}

impl StepItemArgs {
    fn into_reorder(self, direction: Direction) -> Reorder {
        Reorder {
            collection: CollectionId::new(self.studio, self.kind),
            intent: ReorderIntent::step(self.rank as usize - 1, direction),
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// List the items of one list in order
    #[command(aliases = ["l", "ls"])]
    List(CollectionArgs),
    /// Append a pipeline stage
    AddStage(AddStageArgs),
    /// Append a phone number
    AddPhone(AddPhoneArgs),
    /// Append a commercial condition
    AddCondition(AddConditionArgs),
    /// Append a social link
    AddLink(AddLinkArgs),
    /// Change fields of an item
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Remove an item and close the gap it leaves
    #[command(aliases = ["rm", "d"])]
    Remove(ItemRefArgs),
    /// Drag an item onto the slot of another
    #[command(alias = "mv")]
    Move(MoveItemArgs),
    /// Move an item one place towards the top
    Up(StepItemArgs),
    /// Move an item one place towards the bottom
    Down(StepItemArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against the manager and prints the results.
pub struct Cli {
    manager: Manager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: Manager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    pub async fn handle_studio_command(&self, command: StudioCommands) -> Result<()> {
        match command {
            StudioCommands::Create(args) => {
                let studio = self
                    .manager
                    .create_studio(&args.into())
                    .await
                    .context("Failed to create studio")?;
                self.renderer.render(&CreateResult::new(studio).to_string())
            }
            StudioCommands::List => self.list_studios().await,
            StudioCommands::Show(args) => {
                let params = Slug::from(args);
                let overview = self
                    .manager
                    .show_studio(&params)
                    .await
                    .context("Failed to load studio")?
                    .ok_or_else(|| anyhow!("Studio '{}' not found", params.slug))?;
                self.renderer.render(&overview.to_string())
            }
            StudioCommands::Rename(args) => {
                let params = RenameStudio::from(args);
                let studio = self
                    .manager
                    .rename_studio(&params)
                    .await
                    .context("Failed to rename studio")?;
                let changes = vec![format!("Name set to '{}'", params.name)];
                self.renderer
                    .render(&UpdateResult::with_changes(studio, changes).to_string())
            }
            StudioCommands::Delete(args) => {
                let studio = self
                    .manager
                    .delete_studio(&args.into())
                    .await
                    .context("Failed to delete studio")?;
                self.renderer.render(&DeleteResult::new(studio).to_string())
            }
        }
    }

    pub async fn list_studios(&self) -> Result<()> {
        let studios = self
            .manager
            .list_studios()
            .await
            .context("Failed to list studios")?;
        self.renderer.render(&Studios(studios).to_string())
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::List(args) => {
                let collection = CollectionId::from(args);
                self.ensure_studio(&collection).await?;
                let items = self
                    .manager
                    .get_items(&collection)
                    .await
                    .context("Failed to list items")?;
                self.renderer.render(&Items(items).to_string())
            }
            ItemCommands::AddStage(args) => self.add_item(args.into()).await,
            ItemCommands::AddPhone(args) => self.add_item(args.into()).await,
            ItemCommands::AddCondition(args) => self.add_item(args.into()).await,
            ItemCommands::AddLink(args) => self.add_item(args.into()).await,
            ItemCommands::Update(args) => self.update_item(args).await,
            ItemCommands::Remove(args) => self.remove_item(args.into()).await,
            ItemCommands::Move(args) => self.reorder(args.into()).await,
            ItemCommands::Up(args) => self.reorder(args.into_reorder(Direction::Up)).await,
            ItemCommands::Down(args) => self.reorder(args.into_reorder(Direction::Down)).await,
        }
    }

    async fn add_item(&self, params: AddItem) -> Result<()> {
        let controller = self.open(params.collection).await?;
        let item = controller.create(params.payload).await?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    async fn update_item(&self, args: UpdateItemArgs) -> Result<()> {
        let target = ItemRef {
            collection: CollectionId::new(args.item.studio.clone(), args.item.kind),
            id: args.item.id.clone(),
        };
        let controller = self.open(target.collection.clone()).await?;
        let current = controller
            .current()
            .into_iter()
            .find(|item| item.id == target.id)
            .ok_or_else(|| anyhow!("Item '{}' is not in this list", target.id))?;

        let (payload, changes) = args.apply(&current.payload)?;
        let item = controller.update(&target.id, payload).await?;
        self.renderer
            .render(&UpdateResult::with_changes(item, changes).to_string())
    }

    async fn remove_item(&self, params: ItemRef) -> Result<()> {
        let controller = self.open(params.collection).await?;
        let removed = controller
            .current()
            .into_iter()
            .find(|item| item.id == params.id);

        controller.remove(&params.id).await?;

        match removed {
            Some(item) => self.renderer.render(&DeleteResult::new(item).to_string()),
            None => Ok(()),
        }
    }

    async fn reorder(&self, params: Reorder) -> Result<()> {
        let controller = self.open(params.collection).await?;
        let outcome = controller.reorder(&params.intent).await?;
        self.renderer
            .render(&ReorderResult::new(outcome, controller.current()).to_string())
    }

    /// Builds a controller for `collection` and loads its current items.
    async fn open(&self, collection: CollectionId) -> Result<ListController> {
        self.ensure_studio(&collection).await?;
        debug!("Opening {collection}");

        let gateway = RetryingGateway::new(
            SqliteGateway::new(self.manager.clone()),
            self.manager.retry_policy(),
        );
        let controller = ReorderController::with_notifier(collection, gateway, TerminalNotifier);
        controller.refresh().await?;
        Ok(controller)
    }

    async fn ensure_studio(&self, collection: &CollectionId) -> Result<()> {
        let slug = Slug {
            slug: collection.studio.clone(),
        };
        self.manager
            .get_studio(&slug)
            .await
            .context("Failed to load studio")?
            .map(|_| ())
            .ok_or_else(|| anyhow!("Studio '{}' not found", slug.slug))
    }
}
