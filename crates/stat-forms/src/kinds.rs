//! The three forms of the party board and their typed data.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{CrossFieldRule, FieldRule, FormSchema, InputKind};
use crate::validation::{
    AcceptedValidator, EmailValidator, MaxLengthValidator, MinLengthValidator, Optional,
    RegexValidator, UrlValidator,
};
use crate::value::FormValues;

/// Field names, as submitted by the views.
pub mod field {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const REMEMBER_ME: &str = "rememberMe";
    pub const NICKNAME: &str = "nickname";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const AGREE_TERMS: &str = "agreeTerms";
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
    pub const DISCORD_LINK: &str = "discordLink";
}

/// Which form a schema, controller or workflow belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    SignIn,
    SignUp,
    PostCreate,
}

impl FormKind {
    /// Returns the name of the route to visit after a successful submission.
    pub const fn destination(self) -> &'static str {
        match self {
            Self::SignIn => "dashboard",
            Self::SignUp => "sign_in",
            Self::PostCreate => "board",
        }
    }

    /// Returns a short name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::PostCreate => "post_create",
        }
    }

    /// Returns the label of the submit button.
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "로그인",
            Self::SignUp => "회원가입",
            Self::PostCreate => "게시글 등록",
        }
    }

    /// Returns the label of the submit button while busy.
    pub const fn busy_label(self) -> &'static str {
        match self {
            Self::SignIn | Self::SignUp => "처리 중...",
            Self::PostCreate => "저장 중...",
        }
    }

    /// Builds the schema for this form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::InvalidPattern`] if a built-in pattern
    /// fails to compile.
    pub fn schema(self) -> Result<FormSchema> {
        match self {
            Self::SignIn => Ok(sign_in_schema()),
            Self::SignUp => sign_up_schema(),
            Self::PostCreate => Ok(post_create_schema()),
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn sign_in_schema() -> FormSchema {
    FormSchema::new(FormKind::SignIn)
        .field(
            FieldRule::new(field::EMAIL, "이메일", InputKind::Email)
                .required()
                .placeholder("이메일 주소를 입력하세요")
                .validator(MinLengthValidator::with_message(1, "이메일을 입력해주세요"))
                .validator(EmailValidator::new()),
        )
        .field(
            FieldRule::new(field::PASSWORD, "비밀번호", InputKind::Password)
                .required()
                .placeholder("비밀번호를 입력하세요")
                .validator(MinLengthValidator::with_message(1, "비밀번호를 입력해주세요")),
        )
        .field(FieldRule::new(
            field::REMEMBER_ME,
            "로그인 상태 유지",
            InputKind::Checkbox,
        ))
}

fn sign_up_schema() -> Result<FormSchema> {
    let password_pattern = RegexValidator::all(
        &[r"^[A-Za-z\d]{8,}$", r"[A-Za-z]", r"\d"],
        "영문, 숫자를 조합해주세요",
    )?;

    Ok(FormSchema::new(FormKind::SignUp)
        .field(
            FieldRule::new(field::EMAIL, "이메일", InputKind::Email)
                .required()
                .placeholder("이메일 주소를 입력하세요")
                .validator(EmailValidator::new()),
        )
        .field(
            FieldRule::new(field::NICKNAME, "닉네임", InputKind::Text)
                .required()
                .placeholder("게임에서 사용할 닉네임")
                .validator(MinLengthValidator::with_message(
                    2,
                    "닉네임은 2글자 이상이어야 합니다",
                )),
        )
        .field(
            FieldRule::new(field::PASSWORD, "비밀번호", InputKind::Password)
                .required()
                .placeholder("8자 이상, 문자와 숫자 포함")
                .hint("8자 이상, 영문, 숫자를 조합해서 입력해주세요")
                .validator(MinLengthValidator::with_message(
                    8,
                    "비밀번호는 8자 이상이어야 합니다",
                ))
                .validator(password_pattern),
        )
        .field(
            FieldRule::new(field::CONFIRM_PASSWORD, "비밀번호 확인", InputKind::Password)
                .required()
                .placeholder("비밀번호를 다시 입력하세요"),
        )
        .field(
            FieldRule::new(
                field::AGREE_TERMS,
                "이용약관, 개인정보 수집 및 이용에 동의합니다",
                InputKind::Checkbox,
            )
            .validator(AcceptedValidator::with_message("이용약관에 동의해주세요")),
        )
        .cross_rule(CrossFieldRule::matches(
            field::CONFIRM_PASSWORD,
            field::PASSWORD,
            "비밀번호가 일치하지 않습니다",
        )))
}

fn post_create_schema() -> FormSchema {
    FormSchema::new(FormKind::PostCreate)
        .field(
            FieldRule::new(field::TITLE, "제목", InputKind::Text)
                .required()
                .placeholder("게임명과 목적을 포함한 제목을 입력하세요")
                .validator(MinLengthValidator::with_message(
                    5,
                    "제목은 최소 5자 이상이어야 합니다",
                ))
                .validator(MaxLengthValidator::with_message(
                    100,
                    "제목은 최대 100자까지 가능합니다",
                )),
        )
        .field(
            FieldRule::new(field::CONTENT, "내용", InputKind::Textarea)
                .required()
                .placeholder("모집 조건, 시간, 필요한 정보를 자세히 작성해주세요")
                .validator(MinLengthValidator::with_message(
                    10,
                    "내용은 최소 10자 이상이어야 합니다",
                ))
                .validator(MaxLengthValidator::with_message(
                    2000,
                    "내용은 최대 2000자까지 가능합니다",
                )),
        )
        .field(
            FieldRule::new(field::DISCORD_LINK, "디스코드 링크", InputKind::Text)
                .placeholder("예: https://discord.gg/example")
                .validator(Optional::new(UrlValidator::new())),
        )
}

/// Validated sign-in data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Validated sign-up data.
///
/// The confirmation password is dropped once it has matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub agree_terms: bool,
}

/// Validated party post data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostData {
    pub title: String,
    pub content: String,
    /// `None` when the link was left empty.
    pub discord_link: Option<String>,
}

/// Typed values of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatedForm {
    SignIn(SignInData),
    SignUp(SignUpData),
    PostCreate(PostData),
}

impl ValidatedForm {
    /// Coerces a value map into the typed shape of a form kind.
    pub(crate) fn from_values(kind: FormKind, values: &FormValues) -> Self {
        let text = |name: &str| values.text(name).to_string();
        match kind {
            FormKind::SignIn => Self::SignIn(SignInData {
                email: text(field::EMAIL),
                password: text(field::PASSWORD),
                remember_me: values.flag(field::REMEMBER_ME),
            }),
            FormKind::SignUp => Self::SignUp(SignUpData {
                email: text(field::EMAIL),
                nickname: text(field::NICKNAME),
                password: text(field::PASSWORD),
                agree_terms: values.flag(field::AGREE_TERMS),
            }),
            FormKind::PostCreate => {
                let link = text(field::DISCORD_LINK);
                Self::PostCreate(PostData {
                    title: text(field::TITLE),
                    content: text(field::CONTENT),
                    discord_link: (!link.is_empty()).then_some(link),
                })
            }
        }
    }

    /// Returns the form kind.
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::SignIn(_) => FormKind::SignIn,
            Self::SignUp(_) => FormKind::SignUp,
            Self::PostCreate(_) => FormKind::PostCreate,
        }
    }
}
