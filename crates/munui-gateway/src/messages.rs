// SPDX-FileCopyrightText: 2026 Munui Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing localized message strings.
//!
//! These are the short inline strings rendered by clients. Internal causes
//! (datastore errors, webhook failures) are logged server-side and never
//! included here.

pub const MISSING_FIELDS: &str = "모든 필드를 입력해주세요.";
pub const INVALID_PHONE: &str = "올바른 전화번호 형식을 입력해주세요.";
pub const INQUIRY_RECEIVED: &str = "문의가 접수되었습니다.";
pub const SAVE_FAILED: &str = "데이터 저장에 실패했습니다.";
pub const LIST_FAILED: &str = "문의 목록을 불러오는데 실패했습니다.";

pub const UPDATE_MISSING_FIELDS: &str = "ID와 상태를 입력해주세요.";
pub const INVALID_STATUS: &str = "유효하지 않은 상태입니다.";
pub const STATUS_UPDATED: &str = "상태가 업데이트되었습니다.";
pub const UPDATE_FAILED: &str = "상태 업데이트에 실패했습니다.";

pub const DELETE_MISSING_ID: &str = "삭제할 문의 ID를 입력해주세요.";
pub const INQUIRY_DELETED: &str = "문의가 삭제되었습니다.";
pub const DELETE_FAILED: &str = "문의 삭제에 실패했습니다.";

pub const MISSING_PASSWORD: &str = "비밀번호를 입력해주세요.";
pub const INVALID_PASSWORD: &str = "비밀번호가 올바르지 않습니다.";
pub const AUTHENTICATED: &str = "인증되었습니다.";
pub const LOGGED_OUT: &str = "로그아웃되었습니다.";
pub const AUTH_REQUIRED: &str = "인증이 필요합니다.";
