/*!
 * Authentication filters
 *
 * Responsibility:
 * - credential の取り出し (CredentialScheme) と認証の実行 (AuthFilter) を分離する
 * - scheme ごとに独立した filter を chain し、どれか一つが成立すればよい
 *
 * Public API:
 * - apply (filter chain を Router に適用)
 * - CredentialScheme と各 scheme 実装
 */

pub mod filter;
pub mod schemes;

pub use filter::apply;
pub use schemes::{BasicScheme, CredentialScheme, HeaderPairScheme, ParamPairScheme};
