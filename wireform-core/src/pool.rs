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

//! A small mutex-guarded object pool for reusing transient allocations,
//! such as scratch buffers shared across many encode calls.
//!
//! The pool sits off the codec hot path: codecs themselves are stateless and
//! never allocate through it. Released items are reset before they re-enter
//! the free list, so an acquired item is always in its post-reset state.

use std::sync::Mutex;

/// A lock-guarded stack of reusable values.
pub struct Pool<T> {
    items: Mutex<Vec<T>>,
    create: Box<dyn Fn() -> T + Send + Sync>,
    reset: Box<dyn Fn(&mut T) + Send + Sync>,
}

impl<T> Pool<T> {
    /// Creates a pool that builds fresh items with `create` and restores
    /// released items with `reset`.
    pub fn new(
        create: impl Fn() -> T + Send + Sync + 'static,
        reset: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> Pool<T> {
        Pool {
            items: Mutex::new(Vec::new()),
            create: Box::new(create),
            reset: Box::new(reset),
        }
    }

    fn stack(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        match self.items.lock() {
            Ok(guard) => guard,
            // pooled items carry no invariants a panic could break; keep
            // serving from the stack
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Takes an item from the pool, building a fresh one when empty.
    pub fn acquire(&self) -> T {
        let recycled = self.stack().pop();
        recycled.unwrap_or_else(|| (self.create)())
    }

    /// Resets an item and returns it to the pool.
    pub fn release(&self, mut item: T) {
        (self.reset)(&mut item);
        self.stack().push(item);
    }
}
