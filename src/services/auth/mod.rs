/*
 * Responsibility
 * - 認証/認可のドメイン層 (HTTP 非依存)
 * - manager: AuthenticationManager の契約 + 型 (CredentialPair / Identity)
 * - memory: 開発・テスト用の in-memory manager
 * - rules: URL パターン → role 要求のルール表
 */
pub mod manager;
pub mod memory;
pub mod rules;

pub use manager::{AuthenticationError, AuthenticationManager, CredentialPair, Identity};
pub use memory::MemoryAuthenticationManager;
pub use rules::{AuthorizationRule, Requirement, RuleSet};
