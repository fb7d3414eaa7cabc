// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use paapi_sign_core::{Context, Error, ProvideCredential, Result};
use std::collections::HashMap;

/// DotenvCredentialProvider loads PA-API credentials from a dotenv file.
///
/// The file is resolved in this order:
///
/// - the path given by [`DotenvCredentialProvider::with_path`]
/// - env value: `AMAZON_PAAPI_DOTENV_FILE`
/// - `.env` in the current directory
///
/// A file that can't be read yields no credential. A file that can be read
/// but not parsed is an error.
///
/// `${VAR}` substitution is resolved against the process environment first
/// and then against earlier lines of the same file.
#[derive(Debug, Default, Clone)]
pub struct DotenvCredentialProvider {
    path: Option<String>,
}

impl DotenvCredentialProvider {
    /// Create a new DotenvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read credentials from `path` instead.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    fn resolve_path(&self, ctx: &Context) -> String {
        self.path
            .clone()
            .or_else(|| ctx.env_var_non_empty(AMAZON_PAAPI_DOTENV_FILE))
            .unwrap_or_else(|| DEFAULT_DOTENV_FILE.to_string())
    }
}

#[async_trait]
impl ProvideCredential for DotenvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = self.resolve_path(ctx);
        let content = match ctx.file_read(&path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("dotenv file {path} is not readable, skipped: {err:?}");
                return Ok(None);
            }
        };

        let mut envs = HashMap::new();
        for item in dotenvy::from_read_iter(content.as_slice()) {
            let (k, v) = item.map_err(|e| {
                Error::config_invalid(format!("failed to parse dotenv file {path}")).with_source(e)
            })?;
            envs.insert(k, v);
        }

        let access_key = envs.remove(AMAZON_ACCESS_KEY).filter(|v| !v.is_empty());
        let secret_key = envs.remove(AMAZON_SECRET_KEY).filter(|v| !v.is_empty());

        match (access_key, secret_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key: ak,
                secret_key: sk,
            })),
            _ => Ok(None),
        }
    }
}
