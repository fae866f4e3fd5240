//! HTML for the site's pages.
//!
//! Page bodies are fixed markup; the only dynamic text is a signup notice,
//! which always comes from `SignupRejection::message`.

use crate::config::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PROFILE_PASSWORD_LENGTH, MAX_USERNAME_LENGTH,
    PATH_INDEX, PATH_LOGIN, PATH_SHELF, PATH_SIGNUP, SCRIPT_SEARCH, SCRIPT_SHELF,
};
use crate::domain::SignupRejection;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <nav>
    <a href="{index}">Home</a>
    <a href="{shelf}">Shelf</a>
    <a href="{login}">Login</a>
    <a href="{signup}">Sign up</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = title,
        body = body,
        index = PATH_INDEX,
        shelf = PATH_SHELF,
        login = PATH_LOGIN,
        signup = PATH_SIGNUP,
    )
}

/// Main page with the book search box
pub fn index() -> String {
    let body = format!(
        r#"    <h1>Find a book</h1>
    <input id="input-box" type="text" placeholder="Search by title" onkeyup="searchKey(event)">
    <button onclick="search()">Search</button>
    <div class="loading-spinner" style="display: none"></div>
    <ul class="search-result"></ul>
    <script src="{script}"></script>"#,
        script = SCRIPT_SEARCH,
    );
    layout("Home", &body)
}

/// Shelf page; books are kept in browser storage
pub fn shelf() -> String {
    let body = format!(
        r#"    <h1>My shelf</h1>
    <div class="shelf_container">
      <ul class="row"></ul>
    </div>
    <script src="{script}"></script>"#,
        script = SCRIPT_SHELF,
    );
    layout("Shelf", &body)
}

/// Login page
pub fn login() -> String {
    layout(
        "Login",
        r#"    <h1>Log in</h1>
    <form>
      <label>Username <input type="text" name="uid" required></label>
      <label>Password <input type="password" name="psw" required></label>
      <button type="submit">Log in</button>
    </form>"#,
    )
}

/// Signup form, with the pending notice if there is one
pub fn signup(notice: Option<SignupRejection>) -> String {
    let notice = notice
        .map(|reason| {
            format!(
                "    <p class=\"notice\" role=\"alert\">{}</p>\n",
                reason.message()
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"    <h1>Sign up</h1>
{notice}    <form method="post" action="{action}">
      <label>Name <input type="text" name="uname" maxlength="{max_name}" required></label>
      <label>Username <input type="text" name="uid" maxlength="{max_username}" required></label>
      <label>Email <input type="email" name="uemail" maxlength="{max_email}" required></label>
      <label>Password <input type="password" name="psw1" maxlength="{max_password}" required></label>
      <label>Repeat password <input type="password" name="psw2" maxlength="{max_password}" required></label>
      <button type="submit">Sign up</button>
    </form>"#,
        notice = notice,
        action = PATH_SIGNUP,
        max_name = MAX_NAME_LENGTH,
        max_username = MAX_USERNAME_LENGTH,
        max_email = MAX_EMAIL_LENGTH,
        max_password = MAX_PROFILE_PASSWORD_LENGTH,
    );

    layout("Sign up", &body)
}
