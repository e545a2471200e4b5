mod asset;
mod reaction;
mod release;
mod target;

pub use asset::{PageInfo, ReleaseAsset, ReleasePage};
pub use reaction::{Reaction, ReactionContent, ReactionGroup, TotalCount};
pub use release::{
    Account, MentionConnection, ReleaseDetails, ReleaseRepository, RepositoryOwner, TagCommit,
};
pub use target::{ReleaseTarget, TargetParseError};
