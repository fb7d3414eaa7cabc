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

use crate::constants::*;
use paapi_sign_core::utils::Redact;
use paapi_sign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for PA-API signing.
///
/// `Config::default()` targets the Japan marketplace. Values read by
/// [`Config::from_env`] override the defaults only when non-empty.
#[derive(Clone)]
pub struct Config {
    /// `host` will be loaded from
    ///
    /// - env value: [`AMAZON_PAAPI_HOST`]
    /// - default to `webservices.amazon.co.jp`
    pub host: String,
    /// `region` will be loaded from
    ///
    /// - env value: [`AMAZON_PAAPI_REGION`]
    /// - default to `us-west-2`
    ///
    /// PA-API expects the enclosing region here regardless of the host's locale.
    pub region: String,
    /// `service` defaults to `ProductAdvertisingAPI`.
    pub service: String,
    /// `access_key` will be loaded from
    ///
    /// - env value: [`AMAZON_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - env value: [`AMAZON_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `partner_tag` will be loaded from
    ///
    /// - env value: [`AMAZON_PARTNER_TAG`]
    ///
    /// Not used for signing; callers put it into their payload.
    pub partner_tag: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            access_key: None,
            secret_key: None,
            partner_tag: None,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("partner_tag", &self.partner_tag)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var_non_empty(AMAZON_PAAPI_HOST) {
            self.host = v;
        }
        if let Some(v) = ctx.env_var_non_empty(AMAZON_PAAPI_REGION) {
            self.region = v;
        }
        if let Some(v) = ctx.env_var_non_empty(AMAZON_ACCESS_KEY) {
            self.access_key = Some(v);
        }
        if let Some(v) = ctx.env_var_non_empty(AMAZON_SECRET_KEY) {
            self.secret_key = Some(v);
        }
        if let Some(v) = ctx.env_var_non_empty(AMAZON_PARTNER_TAG) {
            self.partner_tag = Some(v);
        }

        self
    }
}
