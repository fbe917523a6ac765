// Fixture server - local stand-in for the QuantumShards Auth app
//
// Serves HTML pages matching the markup the verification flows expect, on
// an ephemeral port, so the browser-driving tests are deterministic and
// offline.

// Note: Functions appear "unused" because each test binary compiles
// separately, but they ARE used across multiple test files.
#![allow(dead_code)]

use axum::{response::Html, routing::get, Router};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Fixture server handle
pub struct AuthServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl AuthServer {
    /// Start the fixture server on a random available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/", get(|| async { Html(index_page()) }))
            .route("/mismatch", get(|| async { Html(mismatch_page()) }))
            .route("/AuthModules/", get(|| async { Html(auth_modules_page()) }))
            .route("/AuthModules/bare", get(|| async { Html(bare_page()) }))
            .route("/AuthModules/stale", get(|| async { Html(stale_page()) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture server");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fixture server failed");
        });

        AuthServer { addr, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn mismatch_url(&self) -> String {
        format!("{}/mismatch", self.url())
    }

    pub fn auth_modules_url(&self) -> String {
        format!("{}/AuthModules/", self.url())
    }

    pub fn bare_url(&self) -> String {
        format!("{}/AuthModules/bare", self.url())
    }

    pub fn stale_url(&self) -> String {
        format!("{}/AuthModules/stale", self.url())
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

// Fixture pages

/// Root page with the title and social metadata the title script checks.
pub fn index_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>QuantumShards Auth</title>
    <meta property="og:title" content="QuantumShards Auth">
    <meta name="author" content="QuantumShards">
    <meta name="twitter:site" content="@QuantumShards">
</head>
<body>
    <h1>QuantumShards Auth</h1>
</body>
</html>"#
        .to_string()
}

/// Root page variant with every metadata value wrong.
pub fn mismatch_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Some Other App</title>
    <meta property="og:title" content="Some Other App">
    <meta name="author" content="Somebody Else">
    <meta name="twitter:site" content="@somebodyelse">
</head>
<body>
    <h1>Some Other App</h1>
</body>
</html>"#
        .to_string()
}

/// AuthModules screen: login form with the "Entrar" button, plus a
/// verification tab revealing the OTP panel on click.
pub fn auth_modules_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>QuantumShards Auth</title></head>
<body>
    <div role="tablist">
        <button role="tab" id="tab-login" aria-selected="true">Login</button>
        <button role="tab" id="tab-verify" aria-selected="false">Verificação</button>
    </div>
    <div id="panel-login">
        <form>
            <input type="email" placeholder="E-mail">
            <input type="password" placeholder="Senha">
            <button type="submit">Entrar</button>
        </form>
    </div>
    <div id="panel-verify" style="display:none">
        <h2>Verificar e-mail</h2>
        <input aria-label="Código de verificação" maxlength="6">
    </div>
    <script>
        document.getElementById('tab-verify').addEventListener('click', () => {
            document.getElementById('panel-login').style.display = 'none';
            document.getElementById('panel-verify').style.display = 'block';
            document.getElementById('tab-verify').setAttribute('aria-selected', 'true');
            document.getElementById('tab-login').setAttribute('aria-selected', 'false');
        });
    </script>
</body>
</html>"#
        .to_string()
}

/// A form without the "Entrar" label, for the not-found branch.
pub fn bare_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>QuantumShards Auth</title></head>
<body>
    <form>
        <input type="email" placeholder="E-mail">
        <button type="submit">Sign in</button>
    </form>
</body>
</html>"#
        .to_string()
}

/// Verification panel whose heading shows but whose code field stays
/// hidden, for the input-not-visible branch of the tab-check draft.
pub fn stale_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>QuantumShards Auth</title></head>
<body>
    <div role="tablist">
        <button role="tab" id="tab-verify">Verificação</button>
    </div>
    <div id="panel-verify" style="display:none">
        <h2>Verificar e-mail</h2>
        <input aria-label="Código de verificação" maxlength="6" style="display:none">
    </div>
    <script>
        document.getElementById('tab-verify').addEventListener('click', () => {
            document.getElementById('panel-verify').style.display = 'block';
        });
    </script>
</body>
</html>"#
        .to_string()
}
