//! Pages shaped like the generator template, shared by the unit tests.

/// A class page with every section: two fields, one constructor, two methods.
pub const COUNTER_PAGE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">
<html lang="en">
<head>
<title>Counter</title>
</head>
<body>
<!-- ======== START OF CLASS DATA ======== -->
<div class="header">
<div class="subTitle">com.example</div>
<h2 title="Class Counter" class="title">Class Counter</h2>
</div>
<div class="contentContainer">
<div class="description">
<ul class="blockList">
<li class="blockList">
<hr>
<br>
<pre>public class <span class="typeNameLabel">Counter</span>
extends <a href="../../java/lang/Object.html" title="class in java.lang">Object</a>
implements <a href="../../java/lang/Runnable.html" title="interface in java.lang">Runnable</a></pre>
<div class="block">A simple counter.
 It counts  upwards.</div>
<dl>
<dt><span class="simpleTagLabel">Since:</span></dt>
<dd>1.2</dd>
<dt><span class="seeLabel">See Also:</span></dt>
<dd><a href="Gauge.html"><code>Gauge</code></a>,
<a href="Meter.html"><code>Meter</code></a></dd>
</dl>
</li>
</ul>
</div>
<div class="summary">
<ul class="blockList">
<li class="blockList">
<!-- =========== FIELD SUMMARY =========== -->
<ul class="blockList">
<li class="blockList"><a name="field.summary">
<!--   -->
</a>
<h3>Field Summary</h3>
</li>
</ul>
</li>
</ul>
</div>
<div class="details">
<ul class="blockList">
<li class="blockList">
<!-- ============ FIELD DETAIL =========== -->
<ul class="blockList">
<li class="blockList"><a name="field.detail">
<!--   -->
</a>
<h3>Field Detail</h3>
<a name="MAX">
<!--   -->
</a>
<ul class="blockList">
<li class="blockList">
<h4>MAX</h4>
<pre>public static final&nbsp;int MAX</pre>
<div class="block">Upper bound.</div>
<dl>
<dt><span class="seeLabel">See Also:</span></dt>
<dd><a href="../../constant-values.html">Constant Field Values</a></dd>
</dl>
</li>
</ul>
<a name="count">
<!--   -->
</a>
<ul class="blockListLast">
<li class="blockList">
<h4>count</h4>
<pre>protected&nbsp;int count</pre>
</li>
</ul>
</li>
</ul>
<!-- ========= CONSTRUCTOR DETAIL ======== -->
<ul class="blockList">
<li class="blockList"><a name="constructor.detail">
<!--   -->
</a>
<h3>Constructor Detail</h3>
<a name="Counter-int-">
<!--   -->
</a>
<ul class="blockListLast">
<li class="blockList">
<h4>Counter</h4>
<pre>public&nbsp;Counter(int&nbsp;start)
        throws <a href="../../java/lang/IllegalArgumentException.html" title="class in java.lang">IllegalArgumentException</a></pre>
<div class="block">Creates a counter.</div>
<dl>
<dt><span class="paramLabel">Parameters:</span></dt>
<dd><code>start</code> - the initial value</dd>
<dt><span class="throwsLabel">Throws:</span></dt>
<dd><code><a href="../../java/lang/IllegalArgumentException.html" title="class in java.lang">IllegalArgumentException</a></code> - if start is negative</dd>
</dl>
</li>
</ul>
</li>
</ul>
<!-- ============ METHOD DETAIL ========== -->
<ul class="blockList">
<li class="blockList"><a name="method.detail">
<!--   -->
</a>
<h3>Method Detail</h3>
<a name="add-int-int-">
<!--   -->
</a>
<ul class="blockList">
<li class="blockList">
<h4>add</h4>
<pre>public&nbsp;int&nbsp;add(int&nbsp;amount,
               int&nbsp;times)</pre>
<div class="block">Adds to the counter.</div>
<dl>
<dt><span class="paramLabel">Parameters:</span></dt>
<dd><code>amount</code> - how much</dd>
<dd><code>times</code> - how often</dd>
<dt><span class="returnLabel">Returns:</span></dt>
<dd>the new value</dd>
<dt><span class="simpleTagLabel">Since:</span></dt>
<dd>1.4</dd>
</dl>
</li>
</ul>
<a name="run--">
<!--   -->
</a>
<ul class="blockListLast">
<li class="blockList">
<h4>run</h4>
<pre>public&nbsp;void&nbsp;run()</pre>
<div class="block">Runs once.</div>
<dl>
<dt><span class="overrideSpecifyLabel">Overrides:</span></dt>
<dd><code><a href="Base.html">run</a></code>&nbsp;in class&nbsp;<code>Base</code></dd>
</dl>
</li>
</ul>
</li>
</ul>
</li>
</ul>
</div>
</div>
<!-- ========= END OF CLASS DATA ========= -->
</body>
</html>
"#;

/// The stub expected from [`COUNTER_PAGE`].
pub const COUNTER_STUB: &str = r#"/**
* A simple counter.
* It counts upwards.
* @since 1.2
* @see <a href="Gauge.html"><code>Gauge</code></a>
* @see <a href="Meter.html"><code>Meter</code></a>
*/
public class Counter extends Object implements Runnable{
/**
* Upper bound.
* @see <a href="../../constant-values.html">Constant Field Values</a>
*/
public static final int MAX;
/**
*/
protected int count;
/**
* Creates a counter.
* @param start the initial value
* @throws IllegalArgumentException - if start is negative
*/
public Counter(int start) throws IllegalArgumentException{}
/**
* Adds to the counter.
* @param amount how much
* @param times how often
* @return the new value
* @since 1.4
*/
public int add(int amount, int times){}
/**
* Runs once.
* @Override <code><a href="Base.html">run</a></code>&nbsp;in class&nbsp;<code>Base</code>
*/
public void run(){}
}
"#;

/// Smallest page that still produces a class: a header and one bare method.
pub const MINIMAL_PAGE: &str = r#"<!-- ======== START OF CLASS DATA ======== -->
<pre>public class <span class="typeNameLabel">Foo</span>
extends Bar</pre>
<div class="block">A test class.</div>
<!-- ============ METHOD DETAIL ========== -->
<ul class="blockList">
<li class="blockList">
<h4>run</h4>
<pre>public void run()</pre>
</li>
</ul>
<!-- ========= END OF CLASS DATA ========= -->
"#;

/// The stub expected from [`MINIMAL_PAGE`].
pub const MINIMAL_STUB: &str = "/**
* A test class.
*/
public class Foo extends Bar{
/**
*/
public void run(){}
}
";
