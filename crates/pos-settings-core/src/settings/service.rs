//! Settings service with caching and write validation
//!
//! Glues the frozen catalog to a `SettingsStore`: reads gather the per-scope
//! candidates for a context and resolve them, writes pass through
//! `validate_set` before anything reaches storage.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

use pos_settings_types::store_adapter::SettingsStore;

use super::catalog::FrozenCatalog;
use super::resolve::resolve_definition;
use super::types::SettingDefinition;
use crate::prelude::*;

const FALLBACK_CACHE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(99);

/// Store and (optionally) user a request is evaluated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingsContext {
	pub store_id: StoreId,
	pub user_id: Option<UserId>,
}

impl SettingsContext {
	pub fn store(store_id: StoreId) -> Self {
		Self { store_id, user_id: None }
	}

	pub fn user(store_id: StoreId, user_id: UserId) -> Self {
		Self { store_id, user_id: Some(user_id) }
	}

	/// Storage slot backing `scope` in this context
	pub fn target(&self, scope: Scope) -> PsResult<ScopeTarget> {
		match scope {
			Scope::Store => Ok(ScopeTarget::Store(self.store_id)),
			Scope::User => self.user_id.map(ScopeTarget::User).ok_or(Error::MissingUser),
			Scope::Default => Err(Error::ScopeNotWritable(Scope::Default)),
		}
	}
}

#[derive(Debug, Clone)]
pub struct SettingsServiceOpts {
	pub cache_size: usize,
}

impl Default for SettingsServiceOpts {
	fn default() -> Self {
		Self { cache_size: 256 }
	}
}

type CacheKey = (StoreId, Option<UserId>, String);

struct CacheState {
	entries: LruCache<CacheKey, ResolvedSetting>,
	epoch: u64,
}

/// LRU cache for resolved settings
///
/// Every invalidation bumps an epoch. A reader takes the epoch before going to
/// the store and hands it back with the value; the value is dropped if a write
/// invalidated the cache in between.
pub struct SettingsCache {
	state: Mutex<CacheState>,
}

impl SettingsCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(FALLBACK_CACHE_SIZE);
		Self { state: Mutex::new(CacheState { entries: LruCache::new(capacity), epoch: 0 }) }
	}

	pub fn get(&self, ctx: &SettingsContext, key: &str) -> Option<ResolvedSetting> {
		self.state.lock().entries.get(&(ctx.store_id, ctx.user_id, key.to_string())).cloned()
	}

	/// Current invalidation epoch, to be passed to `put_if_current`
	pub fn epoch(&self) -> u64 {
		self.state.lock().epoch
	}

	pub fn put(&self, ctx: &SettingsContext, key: &str, value: ResolvedSetting) {
		self.state.lock().entries.put((ctx.store_id, ctx.user_id, key.to_string()), value);
	}

	/// Cache `value` unless the cache was invalidated since `epoch`.
	/// Returns whether the value was stored.
	pub fn put_if_current(
		&self,
		epoch: u64,
		ctx: &SettingsContext,
		key: &str,
		value: ResolvedSetting,
	) -> bool {
		let mut state = self.state.lock();
		if state.epoch != epoch {
			return false;
		}
		state.entries.put((ctx.store_id, ctx.user_id, key.to_string()), value);
		true
	}

	/// Drop every entry a write at `target` may have changed
	pub fn invalidate(&self, target: ScopeTarget) {
		let mut state = self.state.lock();
		state.epoch = state.epoch.wrapping_add(1);
		let stale: Vec<CacheKey> = state
			.entries
			.iter()
			.filter(|((store_id, user_id, _), _)| match target {
				ScopeTarget::Store(id) => *store_id == id,
				ScopeTarget::User(id) => *user_id == Some(id),
			})
			.map(|(k, _)| k.clone())
			.collect();
		for k in &stale {
			state.entries.pop(k);
		}
	}

	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.epoch = state.epoch.wrapping_add(1);
		state.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.state.lock().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.lock().entries.is_empty()
	}
}

/// Settings service - main interface for reading and changing settings
pub struct SettingsService {
	catalog: Arc<FrozenCatalog>,
	cache: SettingsCache,
	store: Arc<dyn SettingsStore>,
}

impl SettingsService {
	pub fn new(
		catalog: Arc<FrozenCatalog>,
		store: Arc<dyn SettingsStore>,
		opts: SettingsServiceOpts,
	) -> Self {
		Self { catalog, cache: SettingsCache::new(opts.cache_size), store }
	}

	/// Get reference to the catalog
	pub fn catalog(&self) -> &Arc<FrozenCatalog> {
		&self.catalog
	}

	pub fn cache(&self) -> &SettingsCache {
		&self.cache
	}

	/// Get the effective value of `key` for `ctx`
	pub async fn get(&self, ctx: &SettingsContext, key: &str) -> PsResult<ResolvedSetting> {
		if let Some(resolved) = self.cache.get(ctx, key) {
			debug!("Setting cache hit: {}@{}", key, ctx.store_id);
			return Ok(resolved);
		}

		let def = self.definition(key)?;
		let epoch = self.cache.epoch();
		let resolved = self.resolve_uncached(ctx, def).await?;
		if !self.cache.put_if_current(epoch, ctx, key, resolved.clone()) {
			debug!("Setting '{}' changed while reading, not cached", key);
		}
		Ok(resolved)
	}

	/// Write `value` for `key` at `scope` in `ctx`
	///
	/// Returns the effective value for `ctx` before and after the write. Nothing
	/// is written if validation fails.
	pub async fn set(
		&self,
		ctx: &SettingsContext,
		scope: Scope,
		key: &str,
		value: SettingValue,
	) -> PsResult<SettingChange> {
		self.catalog.validate_set(key, &value, scope)?;
		let target = ctx.target(scope)?;
		self.write(ctx, target, key, Some(value)).await
	}

	/// Remove the value for `key` at `scope`, falling back to the next scope
	pub async fn delete(
		&self,
		ctx: &SettingsContext,
		scope: Scope,
		key: &str,
	) -> PsResult<SettingChange> {
		let def = self.definition(key)?;
		self.catalog.validate_set(key, def.default_value(), scope)?;
		let target = ctx.target(scope)?;
		self.write(ctx, target, key, None).await
	}

	/// Every definition with its effective value for `ctx`, in catalog order
	pub async fn list(
		&self,
		ctx: &SettingsContext,
	) -> PsResult<Vec<(&SettingDefinition, ResolvedSetting)>> {
		let store_values = self.list_target(ScopeTarget::Store(ctx.store_id)).await?;
		let user_values = match ctx.user_id {
			Some(user_id) => self.list_target(ScopeTarget::User(user_id)).await?,
			None => Default::default(),
		};

		Ok(self
			.catalog
			.all()
			.map(|def| {
				let candidates = Candidates {
					store: store_values.get(def.key()).cloned(),
					user: user_values.get(def.key()).cloned(),
				};
				(def, resolve_definition(def, &candidates))
			})
			.collect())
	}

	/// Type-safe getters - error if the effective value has another type
	pub async fn get_string(&self, ctx: &SettingsContext, key: &str) -> PsResult<String> {
		match self.get(ctx, key).await?.value {
			SettingValue::String(s) => Ok(s),
			v => Err(type_mismatch(key, "string", &v)),
		}
	}

	pub async fn get_int(&self, ctx: &SettingsContext, key: &str) -> PsResult<i64> {
		match self.get(ctx, key).await?.value {
			SettingValue::Int(i) => Ok(i),
			v => Err(type_mismatch(key, "int", &v)),
		}
	}

	pub async fn get_bool(&self, ctx: &SettingsContext, key: &str) -> PsResult<bool> {
		match self.get(ctx, key).await?.value {
			SettingValue::Bool(b) => Ok(b),
			v => Err(type_mismatch(key, "bool", &v)),
		}
	}

	pub async fn get_json(&self, ctx: &SettingsContext, key: &str) -> PsResult<serde_json::Value> {
		match self.get(ctx, key).await?.value {
			SettingValue::Json(j) => Ok(j),
			v => Err(type_mismatch(key, "json", &v)),
		}
	}

	fn definition(&self, key: &str) -> PsResult<&SettingDefinition> {
		self.catalog.get(key).ok_or_else(|| Error::UnknownKey(key.to_string()))
	}

	async fn write(
		&self,
		ctx: &SettingsContext,
		target: ScopeTarget,
		key: &str,
		value: Option<SettingValue>,
	) -> PsResult<SettingChange> {
		let def = self.definition(key)?;
		let before = self.resolve_uncached(ctx, def).await?;
		let deleted = value.is_none();

		self.store
			.update_setting(target, key, value)
			.await
			.inspect_err(|err| warn!("Failed to write setting '{}' at {}: {}", key, target, err))?;
		self.cache.invalidate(target);

		let after = self.resolve_uncached(ctx, def).await?;
		if deleted {
			info!("Setting '{}' deleted at {}", key, target);
		} else {
			info!("Setting '{}' updated at {}", key, target);
		}

		Ok(SettingChange { key: key.to_string(), before, after })
	}

	async fn resolve_uncached(
		&self,
		ctx: &SettingsContext,
		def: &SettingDefinition,
	) -> PsResult<ResolvedSetting> {
		let store = self.read_target(ScopeTarget::Store(ctx.store_id), def.key()).await?;
		let user = match ctx.user_id {
			Some(user_id) => self.read_target(ScopeTarget::User(user_id), def.key()).await?,
			None => None,
		};
		Ok(resolve_definition(def, &Candidates { store, user }))
	}

	async fn read_target(&self, target: ScopeTarget, key: &str) -> PsResult<Option<SettingValue>> {
		self.store
			.read_setting(target, key)
			.await
			.inspect_err(|err| warn!("Failed to read setting '{}' at {}: {}", key, target, err))
	}

	async fn list_target(
		&self,
		target: ScopeTarget,
	) -> PsResult<std::collections::HashMap<String, SettingValue>> {
		self.store
			.list_settings(target)
			.await
			.inspect_err(|err| warn!("Failed to list settings at {}: {}", target, err))
	}
}

fn type_mismatch(key: &str, expected: &'static str, actual: &SettingValue) -> Error {
	Error::TypeMismatch { key: key.to_string(), expected, actual: actual.type_name() }
}


// vim: ts=4
