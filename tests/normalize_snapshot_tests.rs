//! Golden snapshot tests for normalization, suite rendering, and file repair
//!
//! Inputs are shaped like real model output: stray imports, suite wrappers, sibling cases, missing closers.
//!
//! Review changes: `cargo insta review`

use learn::{TestCase, fix_test_file, normalize, render_suite};

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn test_full_file_pasted_as_body() {
    let fragment = r#"import { describe, it, expect } from 'vitest';
import { Queue } from '../solution';

describe('Queue', () => {
  it('starts empty', () => {
    const q = new Queue<number>();
    expect(q.isEmpty()).toBe(true);
    expect(q.size()).toBe(0);
  });
});
"#;
    insta::assert_snapshot!(normalize(fragment), @r"
const q = new solution.Queue<number>();
expect(q.isEmpty()).toBe(true);
expect(q.size()).toBe(0);
");
}

#[test]
fn test_sibling_cases_keep_last() {
    let fragment = r#"describe('Stack', () => {
  it('pushes', () => {
    const s = new Stack();
    s.push(1);
  });

  it('pops in reverse order', () => {
    const s = new Stack();
    s.push(1);
    s.push(2);
    expect(s.pop()).toBe(2);
  });
});"#;
    insta::assert_snapshot!(normalize(fragment), @r"
const s = new solution.Stack();
s.push(1);
s.push(2);
expect(s.pop()).toBe(2);
");
}

#[test]
fn test_async_body_with_builtins() {
    let fragment = r#"it("resolves in order", async () => {
    const seen = new Map();
    const cache = new LRUCache(2);
    await Promise.all([cache.set('a', 1), cache.set('b', 2)]);
    expect(() => cache.get('zz')).toThrow(new RangeError('missing'));
});"#;
    insta::assert_snapshot!(normalize(fragment), @r"
const seen = new Map();
const cache = new solution.LRUCache(2);
await Promise.all([cache.set('a', 1), cache.set('b', 2)]);
expect(() => cache.get('zz')).toThrow(new RangeError('missing'));
");
}

#[test]
fn test_truncated_fragment_shallow_stripped() {
    let fragment = "describe('Trie', () => {\n    const t = new Trie();\n    t.insert('cat');\n    expect(t.has('ca')).toBe(false);\n";
    insta::assert_snapshot!(normalize(fragment), @r"
const t = new solution.Trie();
t.insert('cat');
expect(t.has('ca')).toBe(false);
");
}

#[test]
fn test_braces_inside_strings() {
    let fragment = "it('formats', () => {\n  const f = new Formatter('{name}');\n  expect(f.render({ name: '}' })).toBe('}');\n});";
    insta::assert_snapshot!(normalize(fragment), @r"
const f = new solution.Formatter('{name}');
expect(f.render({ name: '}' })).toBe('}');
");
}

// =============================================================================
// Suites
// =============================================================================

#[test]
fn test_rendered_suite() {
    let cases = vec![
        TestCase::new("starts empty", "const q = new Queue();\nexpect(q.isEmpty()).toBe(true);"),
        TestCase::new(
            "drains asynchronously",
            "it('drains', async () => {\n  const q = new solution.Queue();\n  await q.drain();\n});",
        ),
    ];
    insta::assert_snapshot!(render_suite("Stage 1", &cases), @r"
import { describe, it, expect } from 'vitest';
import * as solution from '../solution.js';

describe('Stage 1', () => {
  it('starts empty', () => {
    const q = new solution.Queue();
    expect(q.isEmpty()).toBe(true);
  });
  it('drains asynchronously', async () => {
    const q = new solution.Queue();
    await q.drain();
  });
});
");
}

#[test]
fn test_repaired_file() {
    let source = r#"import { describe, it, expect } from 'vitest';
import * as solution from '../solution.js';

describe('Stage 3', () => {
  it('evicts the oldest entry', () => {
    import { LRUCache } from './cache';
    describe('LRUCache', () => {
      it('evicts', () => {
        const c = new LRUCache(1);
        c.set('a', 1);
        c.set('b', 2);
        expect(c.get('a')).toBeUndefined();
      });
    });
  });
  it('keeps recent entries', () => {
    const c = new solution.LRUCache(2);
    expect(c.capacity).toBe(2);
  });
});
"#;
    insta::assert_snapshot!(fix_test_file("solution.test.ts", source).unwrap(), @r"
import { describe, it, expect } from 'vitest';
import * as solution from '../solution.js';

describe('Stage 3', () => {
  it('evicts the oldest entry', () => {
    const c = new solution.LRUCache(1);
    c.set('a', 1);
    c.set('b', 2);
    expect(c.get('a')).toBeUndefined();
  });
  it('keeps recent entries', () => {
    const c = new solution.LRUCache(2);
    expect(c.capacity).toBe(2);
  });
});
");
}
