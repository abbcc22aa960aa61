//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の Repository trait を通じてデータを操作します。

pub mod error;
pub mod member_service;

pub use error::{FindMemberError, JoinMemberError};
pub use member_service::MemberService;
