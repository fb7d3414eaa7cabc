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

// Headers used by PA-API.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const CONTENT_ENCODING_AMZ: &str = "amz-1.0";

// SigV4 literals.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
/// Must list the same headers, in the same order, as the canonical header block.
pub const SIGNED_HEADERS: &str = "host;x-amz-date;x-amz-target";

// Defaults for the Japan marketplace.
pub const DEFAULT_HOST: &str = "webservices.amazon.co.jp";
/// PA-API signs with the enclosing region, not the marketplace's locale.
pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_SERVICE: &str = "ProductAdvertisingAPI";

pub const TARGET_PREFIX: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1";

// Env values used by PA-API clients.
pub const AMAZON_ACCESS_KEY: &str = "AMAZON_ACCESS_KEY";
pub const AMAZON_SECRET_KEY: &str = "AMAZON_SECRET_KEY";
pub const AMAZON_PARTNER_TAG: &str = "AMAZON_PARTNER_TAG";
pub const AMAZON_PAAPI_HOST: &str = "AMAZON_PAAPI_HOST";
pub const AMAZON_PAAPI_REGION: &str = "AMAZON_PAAPI_REGION";
pub const AMAZON_PAAPI_DOTENV_FILE: &str = "AMAZON_PAAPI_DOTENV_FILE";

pub const DEFAULT_DOTENV_FILE: &str = ".env";
